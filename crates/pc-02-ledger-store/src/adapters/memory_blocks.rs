use crate::ports::BlockStore;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory plasma block sequencer.
///
/// Tracks the height of the last committed block; the next block is always
/// one above it.
pub struct InMemoryBlockStore {
    current: AtomicU64,
}

impl InMemoryBlockStore {
    pub fn new(current_height: u64) -> Self {
        Self {
            current: AtomicU64::new(current_height),
        }
    }

    /// Commits the block under assembly, returning its height.
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for InMemoryBlockStore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl BlockStore for InMemoryBlockStore {
    fn current_plasma_block_height(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    fn next_plasma_block_height(&self) -> u64 {
        self.current.load(Ordering::SeqCst) + 1
    }
}
