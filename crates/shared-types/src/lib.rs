//! # Shared Types Crate
//!
//! Ledger entities, message types, canonical hashing and the rejection
//! taxonomy shared by every crate of the plasma sidechain core.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Positions are immutable**: a `Position` is assigned once and never reused.
//! - **Typed rejections**: every failure is a `PlasmaError` variant carrying
//!   enough context to build a user-facing message; `ErrorKind` groups them.

pub mod entities;
pub mod errors;
pub mod hashing;

pub use entities::*;
pub use errors::*;
pub use hashing::*;
