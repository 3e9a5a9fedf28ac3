//! Ports layer for the ante handler.
//!
//! Ledger and block store ports live in `pc-02-ledger-store`; the bridge
//! port is specific to admission.

pub mod outbound;

pub use outbound::*;
