//! # Structural Validation
//!
//! Stateless checks run before any ledger or bridge lookup.

use crate::config::TxLimits;
use shared_types::{IncludeDepositMsg, PlasmaError, SpendMsg, MAX_TX_OUTPUTS};
use std::collections::HashSet;

/// Validate the shape of a spend message.
///
/// Signature count is not checked here; signer recovery reports it.
pub fn validate_spend(msg: &SpendMsg, limits: &TxLimits) -> Result<(), PlasmaError> {
    let inputs = msg.inputs();
    let outputs = msg.outputs();

    if inputs.is_empty() {
        return Err(malformed("transaction has no inputs"));
    }
    if outputs.is_empty() {
        return Err(malformed("transaction has no outputs"));
    }
    if inputs.len() > limits.max_inputs {
        return Err(malformed(format!(
            "too many inputs: {} (max {})",
            inputs.len(),
            limits.max_inputs
        )));
    }
    // Output indices are a u8, whatever the configured limit
    let max_outputs = limits.max_outputs.min(MAX_TX_OUTPUTS);
    if outputs.len() > max_outputs {
        return Err(malformed(format!(
            "too many outputs: {} (max {max_outputs})",
            outputs.len()
        )));
    }

    let mut seen = HashSet::with_capacity(inputs.len());
    for input in inputs {
        let position = input.position;
        if !position.is_valid() {
            return Err(malformed(format!("invalid input position {position}")));
        }
        if !seen.insert(position) {
            return Err(malformed(format!("duplicate input position {position}")));
        }
        if (position.is_deposit() || position.is_fee()) && !input.confirm_signatures.is_empty() {
            return Err(malformed(format!(
                "input {position} must not carry confirm signatures"
            )));
        }
    }

    Ok(())
}

/// Validate the shape of an include-deposit message.
pub fn validate_include_deposit(msg: &IncludeDepositMsg) -> Result<(), PlasmaError> {
    if msg.deposit_nonce == 0 {
        return Err(malformed("deposit nonce must be positive"));
    }
    Ok(())
}

fn malformed(reason: impl Into<String>) -> PlasmaError {
    PlasmaError::Malformed(reason.into())
}
