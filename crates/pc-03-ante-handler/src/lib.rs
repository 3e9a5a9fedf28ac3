//! # Admission Gate (Ante Handler)
//!
//! Decides whether a submitted transaction may enter the ledger. Runs before
//! the spend handler and never mutates state.
//!
//! ## Rejection Taxonomy
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | `InvalidTransaction` | Structure, balance, confirm-signature count, deposit inclusion rules |
//! | `InvalidSignature` | Recovered signer count differs from input count |
//! | `InvalidInput` | Input missing or already spent |
//! | `ExitedInput` | Input exited on the root chain |
//! | `InsufficientFee` | First input cannot pay the fee |
//! | `Unauthorized` | Signer does not own the input, bad confirm signature, exited parent input |
//! | `Internal` | Ledger is missing a record it must have |
//!
//! ## Collaborators
//!
//! - Ledger and block store ports from `pc-02-ledger-store`
//! - [`RootChainBridge`] for deposit finality and exit status
//! - Signer recovery from `pc-01-signature-verification`

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::InMemoryRootChainBridge;
pub use config::{AnteConfig, ConfigError, TxLimits};
pub use domain::{validate_include_deposit, validate_spend, AnteHandler};
pub use ports::{DepositStatus, RootChainBridge};
