//! Block-assembly context handed to the spend handler.

use crate::error::FeeError;
use crate::ports::{FeeUpdater, NextTxIndex};
use parking_lot::Mutex;
use primitive_types::U256;
use shared_types::{Hash, FEE_TX_INDEX};
use std::sync::atomic::{AtomicU16, Ordering};

/// Per-block collaborators of a state transition.
pub struct BlockContext<'a> {
    /// Hash of the block data the transaction is included with.
    pub data_hash: Hash,
    pub next_tx_index: &'a dyn NextTxIndex,
    pub fee_updater: &'a dyn FeeUpdater,
}

impl<'a> BlockContext<'a> {
    pub fn new(
        data_hash: Hash,
        next_tx_index: &'a dyn NextTxIndex,
        fee_updater: &'a dyn FeeUpdater,
    ) -> Self {
        Self {
            data_hash,
            next_tx_index,
            fee_updater,
        }
    }
}

/// Monotonic transaction index counter for one block.
///
/// Saturates at the fee sentinel, which is never a valid index for a
/// regular transaction.
#[derive(Debug, Default)]
pub struct TxIndexSequence {
    next: AtomicU16,
}

impl TxIndexSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indices handed out so far.
    pub fn issued(&self) -> u16 {
        self.next.load(Ordering::SeqCst)
    }
}

impl NextTxIndex for TxIndexSequence {
    fn next_tx_index(&self) -> u16 {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |index| {
                (index < FEE_TX_INDEX).then(|| index + 1)
            })
            .unwrap_or_else(|exhausted| exhausted)
    }
}

/// Running total of the fees collected by one block.
#[derive(Debug, Default)]
pub struct FeeAccumulator {
    total: Mutex<U256>,
}

impl FeeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> U256 {
        *self.total.lock()
    }
}

impl FeeUpdater for FeeAccumulator {
    fn update_fee(&self, fee: U256) -> Result<(), FeeError> {
        let mut total = self.total.lock();
        let updated = total.checked_add(fee).ok_or(FeeError::Overflow {
            current: *total,
            fee,
        })?;
        *total = updated;
        Ok(())
    }
}
