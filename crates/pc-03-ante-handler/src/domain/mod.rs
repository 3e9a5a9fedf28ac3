//! # Domain Layer - Admission Gate
//!
//! - `basic`: stateless structural validation
//! - `ante`: ledger- and bridge-aware admission

pub mod ante;
pub mod basic;

pub use ante::AnteHandler;
pub use basic::{validate_include_deposit, validate_spend};
