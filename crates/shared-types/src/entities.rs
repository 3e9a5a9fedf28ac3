//! # Core Ledger Entities
//!
//! Defines the plasma ledger's value types: positions, outputs, inputs,
//! UTXOs, transaction records, deposits and the two message kinds that
//! drive the admission gate and the spend handler.
//!
//! ## Clusters
//!
//! - **Addressing**: `Position`, `FEE_TX_INDEX`, `MAX_TX_OUTPUTS`
//! - **Value**: `Output`, `Utxo`, `Deposit`
//! - **Transactions**: `Input`, `Transaction`, `TransactionRecord`
//! - **Messages**: `SpendMsg`, `IncludeDepositMsg`, `Msg`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

use crate::hashing::{keccak256, sha256};

/// A 32-byte hash (Keccak-256 or SHA-256).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Reserved transaction index of the per-block aggregate fee output.
///
/// Inputs spending a position with this index skip confirm-signature checks.
pub const FEE_TX_INDEX: u16 = u16::MAX;

/// Most outputs a transaction can carry; every output needs a `u8` index.
pub const MAX_TX_OUTPUTS: usize = u8::MAX as usize + 1;

/// A 65-byte recoverable secp256k1 signature: `r || s || v`.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(#[serde_as(as = "Bytes")] pub [u8; 65]);

impl Signature {
    /// Length of the encoded signature in bytes.
    pub const LEN: usize = 65;

    /// Raw bytes of the signature.
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }
}

impl From<[u8; 65]> for Signature {
    fn from(bytes: [u8; 65]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(0x{}..)", hex::encode(&self.0[..8]))
    }
}

/// Render an address as `0x`-prefixed lowercase hex.
pub fn fmt_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

// =============================================================================
// POSITION
// =============================================================================

/// Identifies a unique spendable unit.
///
/// Exactly one of two modes holds:
/// - UTXO mode: `block_height > 0`, `deposit_nonce == 0`
/// - deposit mode: `block_height == 0`, `deposit_nonce > 0`, tx and output index zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Plasma block the producing transaction was included in.
    pub block_height: u64,
    /// Index of the producing transaction within its block.
    pub tx_index: u16,
    /// Index of the output within the producing transaction.
    pub output_index: u8,
    /// Root-chain deposit nonce (deposit mode only).
    pub deposit_nonce: u64,
}

impl Position {
    /// Creates a position from raw components without checking its mode.
    pub const fn new(block_height: u64, tx_index: u16, output_index: u8, deposit_nonce: u64) -> Self {
        Self {
            block_height,
            tx_index,
            output_index,
            deposit_nonce,
        }
    }

    /// Position of an output produced by a sidechain transaction.
    pub const fn utxo(block_height: u64, tx_index: u16, output_index: u8) -> Self {
        Self::new(block_height, tx_index, output_index, 0)
    }

    /// Synthetic position of a root-chain deposit.
    pub const fn deposit(nonce: u64) -> Self {
        Self::new(0, 0, 0, nonce)
    }

    /// Position of the aggregate fee output of `block_height`.
    pub const fn fee(block_height: u64) -> Self {
        Self::new(block_height, FEE_TX_INDEX, 0, 0)
    }

    /// True if this position refers to a deposit.
    pub fn is_deposit(&self) -> bool {
        self.deposit_nonce > 0
    }

    /// True if this position refers to a block fee output.
    pub fn is_fee(&self) -> bool {
        self.tx_index == FEE_TX_INDEX
    }

    /// True if exactly one of UTXO mode or deposit mode holds.
    pub fn is_valid(&self) -> bool {
        let utxo_mode = self.block_height > 0 && self.deposit_nonce == 0;
        let deposit_mode = self.block_height == 0
            && self.deposit_nonce > 0
            && self.tx_index == 0
            && self.output_index == 0;
        utxo_mode || deposit_mode
    }

    /// Position of the transaction that produced this output.
    pub fn transaction_position(&self) -> Self {
        Self::new(self.block_height, self.tx_index, 0, self.deposit_nonce)
    }

    /// Canonical big-endian encoding used for hashing.
    pub fn to_bytes(&self) -> [u8; 19] {
        let mut bytes = [0u8; 19];
        bytes[..8].copy_from_slice(&self.block_height.to_be_bytes());
        bytes[8..10].copy_from_slice(&self.tx_index.to_be_bytes());
        bytes[10] = self.output_index;
        bytes[11..].copy_from_slice(&self.deposit_nonce.to_be_bytes());
        bytes
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.block_height, self.tx_index, self.output_index, self.deposit_nonce
        )
    }
}

// =============================================================================
// VALUE
// =============================================================================

/// An owned amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub owner: Address,
    pub amount: U256,
}

impl Output {
    pub fn new(owner: Address, amount: impl Into<U256>) -> Self {
        Self {
            owner,
            amount: amount.into(),
        }
    }
}

/// An output tracked by the ledger together with its spend state.
///
/// `spent` never reverts and `spender` is set exactly once, together with `spent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    pub output: Output,
    pub spent: bool,
    pub spender: Option<Hash>,
}

impl Utxo {
    /// A freshly created, unspent output.
    pub fn unspent(output: Output) -> Self {
        Self {
            output,
            spent: false,
            spender: None,
        }
    }

    pub fn owner(&self) -> &Address {
        &self.output.owner
    }

    pub fn amount(&self) -> U256 {
        self.output.amount
    }
}

/// A root-chain deposit registered in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub nonce: u64,
    pub owner: Address,
    pub amount: U256,
    pub spent: bool,
    pub spender: Option<Hash>,
}

impl Deposit {
    /// A deposit as reported by the bridge, not yet spent.
    pub fn new(nonce: u64, owner: Address, amount: impl Into<U256>) -> Self {
        Self {
            nonce,
            owner,
            amount: amount.into(),
            spent: false,
            spender: None,
        }
    }

    /// The deposit seen as a spendable output.
    pub fn as_utxo(&self) -> Utxo {
        Utxo {
            output: Output::new(self.owner, self.amount),
            spent: self.spent,
            spender: self.spender,
        }
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// A reference to a spendable unit plus the confirm signatures proving the
/// owners of the parent transaction's inputs acknowledged its inclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub position: Position,
    pub confirm_signatures: Vec<Signature>,
}

impl Input {
    pub fn new(position: Position, confirm_signatures: Vec<Signature>) -> Self {
        Self {
            position,
            confirm_signatures,
        }
    }

    /// An input that needs no confirm signatures (deposit or fee output).
    pub fn unconfirmed(position: Position) -> Self {
        Self::new(position, Vec::new())
    }
}

/// The signable body of a spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub fee: U256,
}

impl Transaction {
    /// Canonical byte encoding covered by input signatures.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            8 + self.inputs.len() * (19 + 8 + 2 * Signature::LEN) + self.outputs.len() * 52 + 32,
        );

        bytes.extend_from_slice(&(self.inputs.len() as u32).to_be_bytes());
        for input in &self.inputs {
            bytes.extend_from_slice(&input.position.to_bytes());
            bytes.extend_from_slice(&(input.confirm_signatures.len() as u32).to_be_bytes());
            for sig in &input.confirm_signatures {
                bytes.extend_from_slice(sig.as_bytes());
            }
        }

        bytes.extend_from_slice(&(self.outputs.len() as u32).to_be_bytes());
        for output in &self.outputs {
            bytes.extend_from_slice(&output.owner);
            bytes.extend_from_slice(&u256_to_be_bytes(&output.amount));
        }

        bytes.extend_from_slice(&u256_to_be_bytes(&self.fee));
        bytes
    }

    /// Keccak-256 of the signing bytes; the pre-image of input signatures.
    pub fn tx_hash(&self) -> Hash {
        keccak256(&self.signing_bytes())
    }
}

/// A transaction as stored by the ledger once included in a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction: Transaction,
    /// Position of the transaction itself (`output_index == 0`).
    pub position: Position,
    /// Spend flag per output.
    pub spent: Vec<bool>,
    /// Spending transaction hash per output.
    pub spenders: Vec<Option<Hash>>,
    /// Binds the transaction to the block it was included in.
    pub confirmation_hash: Hash,
}

impl TransactionRecord {
    /// Record for a newly included transaction; spend state sized to its outputs.
    pub fn new(transaction: Transaction, position: Position, confirmation_hash: Hash) -> Self {
        let outputs = transaction.outputs.len();
        Self {
            transaction,
            position,
            spent: vec![false; outputs],
            spenders: vec![None; outputs],
            confirmation_hash,
        }
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Spend one or more outputs into new outputs, paying a fee.
///
/// `signatures[i]` authorizes `transaction.inputs[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendMsg {
    pub transaction: Transaction,
    pub signatures: Vec<Signature>,
}

impl SpendMsg {
    pub fn new(transaction: Transaction, signatures: Vec<Signature>) -> Self {
        Self {
            transaction,
            signatures,
        }
    }

    pub fn inputs(&self) -> &[Input] {
        &self.transaction.inputs
    }

    pub fn outputs(&self) -> &[Output] {
        &self.transaction.outputs
    }

    pub fn fee(&self) -> U256 {
        self.transaction.fee
    }

    /// Hash recorded as spender of every consumed input.
    pub fn tx_hash(&self) -> Hash {
        self.transaction.tx_hash()
    }

    /// SHA-256 over the signing bytes followed by every signature; the
    /// transaction's leaf in the block's merkle tree.
    pub fn merkle_hash(&self) -> Hash {
        let mut bytes = self.transaction.signing_bytes();
        for sig in &self.signatures {
            bytes.extend_from_slice(sig.as_bytes());
        }
        sha256(&bytes)
    }
}

/// Request to register a finalized root-chain deposit as spendable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeDepositMsg {
    pub deposit_nonce: u64,
    pub owner: Address,
}

/// The unit of work handled by the admission gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    Spend(SpendMsg),
    IncludeDeposit(IncludeDepositMsg),
}

impl Msg {
    /// Stable routing tag of the message kind.
    pub fn msg_type(&self) -> &'static str {
        match self {
            Self::Spend(_) => "spend_utxo",
            Self::IncludeDeposit(_) => "include_deposit",
        }
    }
}

impl From<SpendMsg> for Msg {
    fn from(msg: SpendMsg) -> Self {
        Self::Spend(msg)
    }
}

impl From<IncludeDepositMsg> for Msg {
    fn from(msg: IncludeDepositMsg) -> Self {
        Self::IncludeDeposit(msg)
    }
}

fn u256_to_be_bytes(value: &U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}
