//! # Signature Verification (PC-01)
//!
//! Recovers secp256k1 signers for the plasma sidechain: input signatures of
//! spend messages and confirm signatures over confirmation hashes.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are rejected
//! - **Signed-message convention**: payloads are prefixed with
//!   `"\x19Ethereum Signed Message:\n32"` before hashing, as root-chain wallets do

pub mod domain;

// Re-export public API
pub use domain::ecdsa::{
    address_from_pubkey, recover_address, recover_signed_message, sign_hash, sign_message,
};
pub use domain::errors::SignatureError;
pub use domain::signers::RecoverSigners;
pub use k256::ecdsa::SigningKey;
