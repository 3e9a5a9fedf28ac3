//! Outbound ports (driven side)
//!
//! Both collaborators belong to the block-assembly context and are advanced
//! exactly once per processed transaction.

use crate::error::FeeError;
use primitive_types::U256;

/// Port: Hand out the index of the next transaction in the block
pub trait NextTxIndex {
    /// Index for the transaction being applied
    fn next_tx_index(&self) -> u16;
}

impl<F> NextTxIndex for F
where
    F: Fn() -> u16,
{
    fn next_tx_index(&self) -> u16 {
        self()
    }
}

/// Port: Accumulate the fees collected by the block
pub trait FeeUpdater {
    /// Add `fee` to the block total
    fn update_fee(&self, fee: U256) -> Result<(), FeeError>;
}

impl<F> FeeUpdater for F
where
    F: Fn(U256) -> Result<(), FeeError>,
{
    fn update_fee(&self, fee: U256) -> Result<(), FeeError> {
        self(fee)
    }
}
