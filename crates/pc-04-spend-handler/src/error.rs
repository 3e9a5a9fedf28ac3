//! Error types for block fee accounting

use primitive_types::U256;
use thiserror::Error;

/// Errors raised by a [`FeeUpdater`](crate::ports::FeeUpdater).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// Adding the fee would overflow the block total
    #[error("block fee overflow: current {current}, adding {fee}")]
    Overflow {
        /// Fees collected so far
        current: U256,
        /// Fee being added
        fee: U256,
    },

    /// The block-assembly context refused the fee
    #[error("fee rejected: {0}")]
    Rejected(String),
}
