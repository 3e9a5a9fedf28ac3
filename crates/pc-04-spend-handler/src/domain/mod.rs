//! Domain layer for the state transition handler

pub mod block;
pub mod handler;

pub use block::{BlockContext, FeeAccumulator, TxIndexSequence};
pub use handler::{SpendHandler, SpendReceipt};
