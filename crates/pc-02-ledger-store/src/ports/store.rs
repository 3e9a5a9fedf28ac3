//! Ledger store abstractions.
//!
//! The ledger exclusively owns every UTXO, transaction record and deposit.
//! Lookups hand out owned copies and report absence with `None`; only the
//! spend handler calls the mutating methods.

use shared_types::{Address, Deposit, Hash, Position, StoreError, TransactionRecord, Utxo, U256};

/// UTXO and transaction record storage.
pub trait UtxoStore: Send + Sync {
    /// The output at `position`. Deposit-mode positions resolve through the
    /// registered deposit with the same nonce.
    fn get_utxo(&self, position: &Position) -> Option<Utxo>;

    /// Stores a new output. Positions are never reused.
    fn store_utxo(&self, position: Position, utxo: Utxo) -> Result<(), StoreError>;

    /// Marks the output spent by `spender`.
    fn spend_utxo(&self, position: &Position, spender: Hash) -> Result<(), StoreError>;

    /// The record of the transaction that produced the output at `position`.
    fn get_tx_with_position(&self, position: &Position) -> Option<TransactionRecord>;

    /// Stores a transaction record at its own position.
    fn store_tx(&self, record: TransactionRecord) -> Result<(), StoreError>;

    /// Folds a spent deposit into its owner's account balance.
    fn spend_deposit_with_account(&self, deposit: &Deposit) -> Result<(), StoreError>;

    /// Account-style balance credited from spent deposits.
    fn account_balance(&self, owner: &Address) -> U256;
}

/// Deposit storage keyed by root-chain nonce.
pub trait DepositStore: Send + Sync {
    fn has_deposit(&self, nonce: u64) -> bool;

    fn get_deposit(&self, nonce: u64) -> Option<Deposit>;

    /// Registers a finalized deposit as spendable.
    fn store_deposit(&self, deposit: Deposit) -> Result<(), StoreError>;

    /// Marks the deposit spent by `spender`.
    fn spend_deposit(&self, nonce: u64, spender: Hash) -> Result<(), StoreError>;
}

/// All-or-nothing grouping of ledger mutations.
///
/// Between `begin` and `commit` every mutation is provisional; `rollback`
/// restores the ledger to its state at `begin`.
pub trait Transactional: Send + Sync {
    fn begin(&self) -> Result<(), StoreError>;
    fn commit(&self) -> Result<(), StoreError>;
    fn rollback(&self) -> Result<(), StoreError>;
}

/// The full ledger surface consumed by the admission gate and the spend handler.
pub trait LedgerStore: UtxoStore + DepositStore + Transactional {}

impl<T: UtxoStore + DepositStore + Transactional> LedgerStore for T {}

/// Plasma block sequencing.
pub trait BlockStore: Send + Sync {
    /// Height of the block currently being assembled against.
    fn current_plasma_block_height(&self) -> u64;

    /// Height the next committed block will carry.
    fn next_plasma_block_height(&self) -> u64;
}
