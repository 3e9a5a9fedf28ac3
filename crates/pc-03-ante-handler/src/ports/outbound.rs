//! Outbound (Driven) ports for the ante handler.
//!
//! The root-chain bridge tracks deposit finality and exits; the ante handler
//! only queries it.

use shared_types::{Deposit, Position};

/// Bridge answer to a deposit lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DepositStatus {
    /// The deposit is finalized and spendable.
    Finalized(Deposit),
    /// The deposit exists but needs `threshold` more root-chain blocks.
    Pending { threshold: u64 },
    /// No deposit with this nonce exists.
    Unknown,
}

/// Query interface of the root-chain bridge.
pub trait RootChainBridge: Send + Sync {
    /// Looks up a deposit as of plasma block `height`.
    fn get_deposit(&self, height: u64, nonce: u64) -> DepositStatus;

    /// Whether the output at `position` has been proven exited as of plasma block `height`.
    fn has_tx_been_exited(&self, height: u64, position: &Position) -> bool;
}
