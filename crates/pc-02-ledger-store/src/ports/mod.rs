//! Ports layer for the ledger store.
//!
//! Outbound (driven) ports consumed by the admission gate and the spend handler.

pub mod store;

pub use store::*;
