//! # Plasma Core Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Wired in-memory chain, accounts, message builders
//! ├── integration/      # Admission + state transition scenarios
//! └── properties.rs     # Property tests over random amounts
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pc-tests
//! cargo test -p pc-tests integration::
//! cargo bench -p pc-tests
//! ```

pub mod integration;
