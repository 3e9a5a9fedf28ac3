//! # Error Types
//!
//! Defines the ledger store errors and the rejection taxonomy shared by the
//! admission gate and the spend handler.

use thiserror::Error;

use crate::entities::{fmt_address, Address, Position, U256};

/// Errors raised by a ledger store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No UTXO is stored at the position.
    #[error("utxo not found at position {0}")]
    UtxoNotFound(Position),

    /// The UTXO has already been spent.
    #[error("utxo at position {0} already spent")]
    UtxoAlreadySpent(Position),

    /// A UTXO is already stored at the position; positions are never reused.
    #[error("position {0} already occupied")]
    PositionOccupied(Position),

    /// No deposit is registered under the nonce.
    #[error("deposit {0} not found")]
    DepositNotFound(u64),

    /// The deposit has already been spent.
    #[error("deposit {0} already spent")]
    DepositAlreadySpent(u64),

    /// A deposit is already registered under the nonce.
    #[error("deposit {0} already registered")]
    DepositExists(u64),

    /// Crediting an account would overflow its balance.
    #[error("balance overflow for account {}", fmt_address(.0))]
    BalanceOverflow(Address),

    /// `begin` was called while a ledger transaction is open.
    #[error("ledger transaction already in progress")]
    TransactionInProgress,

    /// `commit` or `rollback` was called without an open ledger transaction.
    #[error("no ledger transaction in progress")]
    NoTransaction,
}

/// Rejection kinds surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structural or business-rule violation.
    InvalidTransaction,
    /// Signer count does not match the signature count.
    InvalidSignature,
    /// Referenced UTXO is missing or already spent.
    InvalidInput,
    /// The input has exited on the root chain.
    ExitedInput,
    /// The first input does not cover the declared fee.
    InsufficientFee,
    /// A signature does not authorize the spend.
    Unauthorized,
    /// Broken invariant or store corruption; never caused by a well-formed transaction alone.
    Internal,
}

/// A rejection produced by the admission gate or the spend handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlasmaError {
    // =========================================================================
    // Structure
    // =========================================================================
    /// The transaction does not carry exactly one message.
    #[error("transaction must carry exactly one msg, got {0}")]
    MsgCount(usize),

    /// A structural rule of the message is violated.
    #[error("malformed transaction: {0}")]
    Malformed(String),

    // =========================================================================
    // Signatures
    // =========================================================================
    /// No signer could be recovered from the message.
    #[error("failed recovering signers")]
    SignerRecoveryFailed,

    /// The number of recovered signers differs from the number of inputs.
    #[error("number of signers ({signers}) does not equal number of inputs ({inputs})")]
    SignerCountMismatch { signers: usize, inputs: usize },

    /// The signer of an input is not the owner of the referenced output.
    #[error(
        "input {position} not signed by its owner. Got: {}. Expected: {}",
        fmt_address(.signer),
        fmt_address(.owner)
    )]
    InputNotOwned {
        position: Position,
        owner: Address,
        signer: Address,
    },

    /// The number of confirm signatures differs from the parent's input count.
    #[error("incorrect number of confirm signatures for input {position}: expected {expected}, got {actual}")]
    ConfirmSignatureCount {
        position: Position,
        expected: usize,
        actual: usize,
    },

    /// A confirm signature could not be recovered.
    #[error("invalid confirm signature for input {position}: {reason}")]
    InvalidConfirmSignature { position: Position, reason: String },

    /// A confirm signature recovered to an address other than the parent input's owner.
    #[error(
        "confirm signature not signed by the correct address. Got: {}. Expected: {}",
        fmt_address(.actual),
        fmt_address(.expected)
    )]
    ConfirmSignatureMismatch { expected: Address, actual: Address },

    // =========================================================================
    // Inputs
    // =========================================================================
    /// The referenced output does not exist.
    #[error("input, {0}, does not exist")]
    InputNotFound(Position),

    /// The referenced output is already spent.
    #[error("input, {0}, already spent")]
    InputAlreadySpent(Position),

    /// The referenced output has exited on the root chain.
    #[error("input, {0}, utxo has exited")]
    InputExited(Position),

    /// An input of the transaction that created the referenced output has exited.
    #[error("a parent of the input has exited. Position: {0}")]
    ParentInputExited(Position),

    // =========================================================================
    // Amounts
    // =========================================================================
    /// The first input cannot pay the declared fee.
    #[error("first input has an insufficient amount ({amount}) to pay the fee ({fee})")]
    InsufficientFee { fee: U256, amount: U256 },

    /// Inputs do not equal outputs plus fee.
    #[error("inputs ({inputs}) do not equal outputs (+ fee) ({outputs})")]
    Unbalanced { inputs: U256, outputs: U256 },

    /// Summing amounts overflowed.
    #[error("amount overflow while summing {0}")]
    AmountOverflow(&'static str),

    // =========================================================================
    // Deposits
    // =========================================================================
    /// The deposit is already registered in the ledger.
    #[error("deposit, {0}, already exists in store")]
    DepositExists(u64),

    /// The bridge does not know the deposit.
    #[error("deposit, {0}, does not exist")]
    DepositNotFound(u64),

    /// The deposit exists but has not reached finality.
    #[error("deposit, {nonce}, has not finalized yet. Please wait at least {threshold} blocks before resubmitting")]
    DepositNotFinalized { nonce: u64, threshold: u64 },

    /// The bridge-reported owner differs from the declared owner.
    #[error(
        "deposit, {nonce}, owned by {} does not equal the owner specified in the include-deposit msg ({})",
        fmt_address(.actual),
        fmt_address(.declared)
    )]
    DepositOwnerMismatch {
        nonce: u64,
        declared: Address,
        actual: Address,
    },

    /// The deposit has already exited from the root chain.
    #[error("deposit, {0}, has already exited from rootchain")]
    DepositExited(u64),

    // =========================================================================
    // Internal
    // =========================================================================
    /// A ledger store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Broken invariant or store corruption.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlasmaError {
    /// Maps the rejection onto the caller-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MsgCount(_)
            | Self::Malformed(_)
            | Self::SignerRecoveryFailed
            | Self::ConfirmSignatureCount { .. }
            | Self::Unbalanced { .. }
            | Self::AmountOverflow(_)
            | Self::DepositExists(_)
            | Self::DepositNotFound(_)
            | Self::DepositNotFinalized { .. }
            | Self::DepositOwnerMismatch { .. }
            | Self::DepositExited(_) => ErrorKind::InvalidTransaction,

            Self::SignerCountMismatch { .. } => ErrorKind::InvalidSignature,

            Self::InputNotFound(_) | Self::InputAlreadySpent(_) => ErrorKind::InvalidInput,

            Self::InputExited(_) => ErrorKind::ExitedInput,

            Self::InsufficientFee { .. } => ErrorKind::InsufficientFee,

            Self::InputNotOwned { .. }
            | Self::InvalidConfirmSignature { .. }
            | Self::ConfirmSignatureMismatch { .. }
            | Self::ParentInputExited(_) => ErrorKind::Unauthorized,

            Self::Store(err) => match err {
                StoreError::UtxoNotFound(_)
                | StoreError::UtxoAlreadySpent(_)
                | StoreError::DepositAlreadySpent(_) => ErrorKind::InvalidInput,
                _ => ErrorKind::Internal,
            },

            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True for failures that indicate a bug or store corruption.
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}
