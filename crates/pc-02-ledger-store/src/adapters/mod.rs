//! In-memory adapters for the ledger ports.

pub mod memory_blocks;
pub mod memory_store;

pub use memory_blocks::*;
pub use memory_store::*;
