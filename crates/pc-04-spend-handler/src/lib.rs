//! # State Transition Handler (Spend Handler)
//!
//! Applies admitted spends to the ledger. This crate is the only writer of
//! the ledger store.
//!
//! ## Apply steps
//!
//! | Step | Effect |
//! |------|--------|
//! | 1 | Take the next tx index and the next plasma block height |
//! | 2 | Compute `sha256(merkle_hash || block data hash)` as confirmation hash |
//! | 3 | Store the transaction record at `(height, index, 0, 0)` |
//! | 4 | Spend inputs; deposits credit their owner's account |
//! | 5 | Report the fee to the block |
//! | 6 | Create one UTXO per output at `(height, index, i, 0)` |
//!
//! All steps share one ledger transaction and roll back together.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{BlockContext, FeeAccumulator, SpendHandler, SpendReceipt, TxIndexSequence};
pub use error::FeeError;
pub use ports::{FeeUpdater, NextTxIndex};
