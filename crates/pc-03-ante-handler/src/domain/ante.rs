//! # Admission Gate
//!
//! Decides whether a message may enter the ledger. Admission is read-only:
//! it consults the ledger, the block store and the root-chain bridge but
//! never mutates any of them.
//!
//! ## Spend checks (in order)
//!
//! 1. Structural validation
//! 2. Signer recovery, one signer per input
//! 3. Per input: existence, spent flag, ownership, exit status, parent
//!    record, confirm signatures, parent exits, fee coverage (first input)
//! 4. `sum(inputs) == sum(outputs) + fee`

use crate::config::AnteConfig;
use crate::domain::basic::{validate_include_deposit, validate_spend};
use crate::ports::{DepositStatus, RootChainBridge};
use pc_01_signature_verification::{recover_signed_message, RecoverSigners};
use pc_02_ledger_store::{BlockStore, LedgerStore};
use shared_types::{
    Address, IncludeDepositMsg, Input, Msg, PlasmaError, Position, SpendMsg, TransactionRecord,
    U256,
};
use std::sync::Arc;

/// Admission gate over a ledger, a block store and a root-chain bridge.
pub struct AnteHandler {
    ledger: Arc<dyn LedgerStore>,
    blocks: Arc<dyn BlockStore>,
    bridge: Arc<dyn RootChainBridge>,
    config: AnteConfig,
}

impl AnteHandler {
    /// Create a handler with default limits.
    pub fn new(
        ledger: Arc<dyn LedgerStore>,
        blocks: Arc<dyn BlockStore>,
        bridge: Arc<dyn RootChainBridge>,
    ) -> Self {
        Self::with_config(ledger, blocks, bridge, AnteConfig::default())
    }

    /// Create a handler with explicit configuration.
    pub fn with_config(
        ledger: Arc<dyn LedgerStore>,
        blocks: Arc<dyn BlockStore>,
        bridge: Arc<dyn RootChainBridge>,
        config: AnteConfig,
    ) -> Self {
        Self {
            ledger,
            blocks,
            bridge,
            config,
        }
    }

    pub fn config(&self) -> &AnteConfig {
        &self.config
    }

    /// Admit a transaction; it must carry exactly one message.
    pub fn admit_tx(&self, msgs: &[Msg]) -> Result<(), PlasmaError> {
        match msgs {
            [msg] => self.admit(msg),
            _ => {
                tracing::debug!(count = msgs.len(), "rejected transaction with bad msg count");
                Err(PlasmaError::MsgCount(msgs.len()))
            }
        }
    }

    /// Admit a single message.
    pub fn admit(&self, msg: &Msg) -> Result<(), PlasmaError> {
        let result = match msg {
            Msg::Spend(spend) => self.admit_spend(spend),
            Msg::IncludeDeposit(include) => self.admit_include_deposit(include),
        };

        match &result {
            Ok(()) => tracing::debug!(msg_type = msg.msg_type(), "msg admitted"),
            Err(err) if err.is_internal() => {
                tracing::error!(msg_type = msg.msg_type(), error = %err, "admission failed")
            }
            Err(err) => tracing::debug!(
                msg_type = msg.msg_type(),
                kind = ?err.kind(),
                error = %err,
                "msg rejected"
            ),
        }
        result
    }

    // =========================================================================
    // SPEND
    // =========================================================================

    fn admit_spend(&self, msg: &SpendMsg) -> Result<(), PlasmaError> {
        validate_spend(msg, &self.config.limits)?;

        let signers = msg.signers();
        if signers.is_empty() {
            return Err(PlasmaError::SignerRecoveryFailed);
        }
        if signers.len() != msg.inputs().len() {
            return Err(PlasmaError::SignerCountMismatch {
                signers: signers.len(),
                inputs: msg.inputs().len(),
            });
        }

        let height = self.blocks.current_plasma_block_height();
        let fee = msg.fee();

        let mut total_inputs = U256::zero();
        for (i, (input, signer)) in msg.inputs().iter().zip(&signers).enumerate() {
            let amount = self.check_input(height, input, signer)?;
            total_inputs = total_inputs
                .checked_add(amount)
                .ok_or(PlasmaError::AmountOverflow("inputs"))?;

            // Only the first input pays the fee
            if i == 0 && amount < fee {
                return Err(PlasmaError::InsufficientFee { fee, amount });
            }
        }

        let mut total_outputs = fee;
        for output in msg.outputs() {
            total_outputs = total_outputs
                .checked_add(output.amount)
                .ok_or(PlasmaError::AmountOverflow("outputs"))?;
        }

        if total_inputs != total_outputs {
            return Err(PlasmaError::Unbalanced {
                inputs: total_inputs,
                outputs: total_outputs,
            });
        }
        Ok(())
    }

    /// Validate one input against the ledger and bridge, returning its amount.
    fn check_input(
        &self,
        height: u64,
        input: &Input,
        signer: &Address,
    ) -> Result<U256, PlasmaError> {
        let position = input.position;

        let utxo = self
            .ledger
            .get_utxo(&position)
            .ok_or(PlasmaError::InputNotFound(position))?;
        if utxo.spent {
            return Err(PlasmaError::InputAlreadySpent(position));
        }
        if utxo.owner() != signer {
            return Err(PlasmaError::InputNotOwned {
                position,
                owner: *utxo.owner(),
                signer: *signer,
            });
        }
        if self.bridge.has_tx_been_exited(height, &position) {
            return Err(PlasmaError::InputExited(position));
        }

        // Deposits have no producing transaction
        if position.is_deposit() {
            return Ok(utxo.amount());
        }

        let parent = self.ledger.get_tx_with_position(&position).ok_or_else(|| {
            PlasmaError::Internal(format!("no transaction record for input {position}"))
        })?;

        if !position.is_fee() {
            self.verify_confirm_signatures(input, &parent)?;
        }

        for parent_input in &parent.transaction.inputs {
            if self.bridge.has_tx_been_exited(height, &parent_input.position) {
                return Err(PlasmaError::ParentInputExited(parent_input.position));
            }
        }

        Ok(utxo.amount())
    }

    /// Every owner of the parent's inputs must have signed its confirmation hash.
    fn verify_confirm_signatures(
        &self,
        input: &Input,
        parent: &TransactionRecord,
    ) -> Result<(), PlasmaError> {
        let position = input.position;
        let parent_inputs = &parent.transaction.inputs;

        if input.confirm_signatures.len() != parent_inputs.len() {
            return Err(PlasmaError::ConfirmSignatureCount {
                position,
                expected: parent_inputs.len(),
                actual: input.confirm_signatures.len(),
            });
        }

        for (parent_input, signature) in parent_inputs.iter().zip(&input.confirm_signatures) {
            let parent_utxo = self.ledger.get_utxo(&parent_input.position).ok_or_else(|| {
                PlasmaError::Internal(format!(
                    "missing parent utxo {} of input {position}",
                    parent_input.position
                ))
            })?;

            let actual = recover_signed_message(&parent.confirmation_hash, signature).map_err(
                |err| PlasmaError::InvalidConfirmSignature {
                    position,
                    reason: err.to_string(),
                },
            )?;

            if actual != *parent_utxo.owner() {
                return Err(PlasmaError::ConfirmSignatureMismatch {
                    expected: *parent_utxo.owner(),
                    actual,
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // INCLUDE DEPOSIT
    // =========================================================================

    fn admit_include_deposit(&self, msg: &IncludeDepositMsg) -> Result<(), PlasmaError> {
        validate_include_deposit(msg)?;
        let nonce = msg.deposit_nonce;

        if self.ledger.has_deposit(nonce) {
            return Err(PlasmaError::DepositExists(nonce));
        }

        let height = self.blocks.current_plasma_block_height();
        let deposit = match self.bridge.get_deposit(height, nonce) {
            DepositStatus::Finalized(deposit) => deposit,
            DepositStatus::Pending { threshold } => {
                return Err(PlasmaError::DepositNotFinalized { nonce, threshold })
            }
            DepositStatus::Unknown => return Err(PlasmaError::DepositNotFound(nonce)),
        };

        if deposit.owner != msg.owner {
            return Err(PlasmaError::DepositOwnerMismatch {
                nonce,
                declared: msg.owner,
                actual: deposit.owner,
            });
        }

        if self
            .bridge
            .has_tx_been_exited(height, &Position::deposit(nonce))
        {
            return Err(PlasmaError::DepositExited(nonce));
        }
        Ok(())
    }
}
