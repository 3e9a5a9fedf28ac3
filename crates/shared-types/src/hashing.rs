//! # Hashing
//!
//! Hash functions shared by message hashing, confirmation hashes and
//! signature recovery.

use sha2::Sha256;
use sha3::{Digest, Keccak256};

use crate::entities::Hash;

/// Prefix applied by the root chain's "signed message" convention to a 32-byte payload.
pub const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Keccak-256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// SHA-256 hash function.
#[inline]
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Digest a 32-byte payload the way root-chain wallets sign messages:
/// `keccak256(prefix || payload)`.
pub fn signed_message_hash(payload: &Hash) -> Hash {
    let mut bytes = Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + payload.len());
    bytes.extend_from_slice(SIGNED_MESSAGE_PREFIX);
    bytes.extend_from_slice(payload);
    keccak256(&bytes)
}

/// Hash binding a transaction to the block it was included in:
/// `sha256(merkle_hash || block_data_hash)`.
pub fn confirmation_hash(merkle_hash: &Hash, block_data_hash: &Hash) -> Hash {
    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(merkle_hash);
    bytes[32..].copy_from_slice(block_data_hash);
    sha256(&bytes)
}
