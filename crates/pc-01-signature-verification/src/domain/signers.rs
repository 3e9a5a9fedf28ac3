//! # Message Signers
//!
//! Recovers the addresses authorizing a message from the signatures it
//! carries. Each input signature of a `SpendMsg` covers the signed-message
//! hash of the transaction hash and is matched to its input by position.

use super::ecdsa::recover_signed_message;
use rayon::prelude::*;
use shared_types::{Address, IncludeDepositMsg, SpendMsg};

/// Signer recovery capability carried by a message.
pub trait RecoverSigners {
    /// Addresses that signed the message, in signature order.
    ///
    /// Returns an empty list if any signature fails to recover, so a partially
    /// recoverable message never yields a misaligned signer list.
    fn signers(&self) -> Vec<Address>;
}

impl RecoverSigners for SpendMsg {
    fn signers(&self) -> Vec<Address> {
        let tx_hash = self.tx_hash();

        let recovered: Result<Vec<Address>, _> = self
            .signatures
            .par_iter()
            .map(|sig| recover_signed_message(&tx_hash, sig))
            .collect();

        match recovered {
            Ok(signers) => signers,
            Err(err) => {
                tracing::debug!(error = %err, "failed to recover spend signers");
                Vec::new()
            }
        }
    }
}

impl RecoverSigners for IncludeDepositMsg {
    /// Deposit inclusion is authorized by the bridge, not by a signature.
    fn signers(&self) -> Vec<Address> {
        Vec::new()
    }
}
