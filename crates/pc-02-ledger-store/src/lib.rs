//! # pc-02-ledger-store
//!
//! Ledger store ports and in-memory adapters for the plasma sidechain.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: owns every UTXO, transaction record and deposit
//! - **Read-only for admission**: the ante handler only calls lookups
//! - **Single writer**: the spend handler mutates inside `begin`/`commit`
//!
//! ```text
//! [Ante Handler (3)] ──lookups──→ [Ledger Store (2)] ←──mutations── [Spend Handler (4)]
//! ```

pub mod adapters;
pub mod ports;

pub use adapters::*;
pub use ports::*;
