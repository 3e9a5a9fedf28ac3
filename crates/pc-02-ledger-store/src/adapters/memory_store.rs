use crate::ports::{DepositStore, Transactional, UtxoStore};
use parking_lot::{Mutex, RwLock};
use shared_types::{Address, Deposit, Hash, Position, StoreError, TransactionRecord, Utxo, U256};
use std::collections::HashMap;

/// Everything the ledger owns.
#[derive(Debug, Clone, Default)]
struct LedgerState {
    utxos: HashMap<Position, Utxo>,
    txs: HashMap<Position, TransactionRecord>,
    deposits: HashMap<u64, Deposit>,
    accounts: HashMap<Address, U256>,
}

/// In-memory ledger with single-level transactional semantics.
///
/// `begin` snapshots the whole state; `rollback` swaps the snapshot back in.
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
    checkpoint: Mutex<Option<LedgerState>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            checkpoint: Mutex::new(None),
        }
    }

    /// Number of stored UTXOs (deposits excluded).
    pub fn utxo_count(&self) -> usize {
        self.state.read().utxos.len()
    }

    /// True while a ledger transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.checkpoint.lock().is_some()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl UtxoStore for InMemoryLedger {
    fn get_utxo(&self, position: &Position) -> Option<Utxo> {
        let state = self.state.read();
        if position.is_deposit() {
            return state
                .deposits
                .get(&position.deposit_nonce)
                .map(Deposit::as_utxo);
        }
        state.utxos.get(position).cloned()
    }

    fn store_utxo(&self, position: Position, utxo: Utxo) -> Result<(), StoreError> {
        let mut state = self.state.write();
        if state.utxos.contains_key(&position) {
            return Err(StoreError::PositionOccupied(position));
        }
        state.utxos.insert(position, utxo);
        Ok(())
    }

    fn spend_utxo(&self, position: &Position, spender: Hash) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let utxo = state
            .utxos
            .get_mut(position)
            .ok_or(StoreError::UtxoNotFound(*position))?;
        if utxo.spent {
            return Err(StoreError::UtxoAlreadySpent(*position));
        }
        utxo.spent = true;
        utxo.spender = Some(spender);

        // Mirror the spend on the producing record
        let index = position.output_index as usize;
        if let Some(record) = state.txs.get_mut(&position.transaction_position()) {
            if index < record.spent.len() {
                record.spent[index] = true;
                record.spenders[index] = Some(spender);
            }
        }
        Ok(())
    }

    fn get_tx_with_position(&self, position: &Position) -> Option<TransactionRecord> {
        self.state
            .read()
            .txs
            .get(&position.transaction_position())
            .cloned()
    }

    fn store_tx(&self, record: TransactionRecord) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let key = record.position.transaction_position();
        if state.txs.contains_key(&key) {
            return Err(StoreError::PositionOccupied(key));
        }
        state.txs.insert(key, record);
        Ok(())
    }

    fn spend_deposit_with_account(&self, deposit: &Deposit) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let balance = state.accounts.entry(deposit.owner).or_insert_with(U256::zero);
        *balance = balance
            .checked_add(deposit.amount)
            .ok_or(StoreError::BalanceOverflow(deposit.owner))?;
        Ok(())
    }

    fn account_balance(&self, owner: &Address) -> U256 {
        self.state
            .read()
            .accounts
            .get(owner)
            .copied()
            .unwrap_or_default()
    }
}

impl DepositStore for InMemoryLedger {
    fn has_deposit(&self, nonce: u64) -> bool {
        self.state.read().deposits.contains_key(&nonce)
    }

    fn get_deposit(&self, nonce: u64) -> Option<Deposit> {
        self.state.read().deposits.get(&nonce).cloned()
    }

    fn store_deposit(&self, deposit: Deposit) -> Result<(), StoreError> {
        let mut state = self.state.write();
        if state.deposits.contains_key(&deposit.nonce) {
            return Err(StoreError::DepositExists(deposit.nonce));
        }
        state.deposits.insert(deposit.nonce, deposit);
        Ok(())
    }

    fn spend_deposit(&self, nonce: u64, spender: Hash) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let deposit = state
            .deposits
            .get_mut(&nonce)
            .ok_or(StoreError::DepositNotFound(nonce))?;
        if deposit.spent {
            return Err(StoreError::DepositAlreadySpent(nonce));
        }
        deposit.spent = true;
        deposit.spender = Some(spender);
        Ok(())
    }
}

impl Transactional for InMemoryLedger {
    fn begin(&self) -> Result<(), StoreError> {
        let mut checkpoint = self.checkpoint.lock();
        if checkpoint.is_some() {
            return Err(StoreError::TransactionInProgress);
        }
        *checkpoint = Some(self.state.read().clone());
        Ok(())
    }

    fn commit(&self) -> Result<(), StoreError> {
        self.checkpoint
            .lock()
            .take()
            .map(|_| ())
            .ok_or(StoreError::NoTransaction)
    }

    fn rollback(&self) -> Result<(), StoreError> {
        let snapshot = self
            .checkpoint
            .lock()
            .take()
            .ok_or(StoreError::NoTransaction)?;
        *self.state.write() = snapshot;
        tracing::debug!("ledger transaction rolled back");
        Ok(())
    }
}
