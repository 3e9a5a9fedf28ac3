//! Adapters layer for the ante handler.

pub mod memory_bridge;

pub use memory_bridge::InMemoryRootChainBridge;
