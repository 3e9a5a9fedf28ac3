//! # State Transition Handler
//!
//! Applies an admitted spend to the ledger: records the transaction, spends
//! its inputs, creates its outputs and reports the fee. Every ledger mutation
//! runs inside one ledger transaction, and the fee is reported only once all
//! of them succeeded, so a failure at any step leaves both the ledger and the
//! block's fee total exactly as they were.

use super::block::BlockContext;
use pc_02_ledger_store::{BlockStore, LedgerStore};
use serde::{Deserialize, Serialize};
use shared_types::{
    confirmation_hash, Hash, Msg, PlasmaError, Position, SpendMsg, TransactionRecord, Utxo,
    FEE_TX_INDEX, MAX_TX_OUTPUTS,
};
use std::sync::Arc;

/// Outcome of a successful spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendReceipt {
    /// Hash recorded as spender of every consumed input
    pub tx_hash: Hash,
    /// Position of the transaction record
    pub position: Position,
    /// Positions of the created outputs, in output order
    pub output_positions: Vec<Position>,
    pub confirmation_hash: Hash,
}

/// The only writer of the ledger.
pub struct SpendHandler {
    ledger: Arc<dyn LedgerStore>,
    blocks: Arc<dyn BlockStore>,
}

impl SpendHandler {
    pub fn new(ledger: Arc<dyn LedgerStore>, blocks: Arc<dyn BlockStore>) -> Self {
        Self { ledger, blocks }
    }

    /// Runtime dispatch over message kinds.
    ///
    /// Deposit inclusion has no state transition of its own and yields `None`.
    pub fn deliver(
        &self,
        ctx: &BlockContext<'_>,
        msg: &Msg,
    ) -> Result<Option<SpendReceipt>, PlasmaError> {
        match msg {
            Msg::Spend(spend) => self.apply(ctx, spend).map(Some),
            Msg::IncludeDeposit(include) => {
                tracing::debug!(
                    nonce = include.deposit_nonce,
                    "include-deposit carries no state transition"
                );
                Ok(None)
            }
        }
    }

    /// Apply an admitted spend atomically.
    pub fn apply(&self, ctx: &BlockContext<'_>, msg: &SpendMsg) -> Result<SpendReceipt, PlasmaError> {
        self.ledger.begin()?;

        match self.apply_in_transaction(ctx, msg) {
            Ok(receipt) => {
                self.ledger.commit()?;
                tracing::debug!(
                    position = %receipt.position,
                    tx_hash = %hex::encode(receipt.tx_hash),
                    outputs = receipt.output_positions.len(),
                    "spend applied"
                );
                Ok(receipt)
            }
            Err(err) => {
                if let Err(rollback_err) = self.ledger.rollback() {
                    tracing::error!(error = %rollback_err, "failed to roll back spend");
                }
                if err.is_internal() {
                    tracing::error!(error = %err, "spend failed");
                } else {
                    tracing::debug!(kind = ?err.kind(), error = %err, "spend rejected");
                }
                Err(err)
            }
        }
    }

    fn apply_in_transaction(
        &self,
        ctx: &BlockContext<'_>,
        msg: &SpendMsg,
    ) -> Result<SpendReceipt, PlasmaError> {
        let tx_index = ctx.next_tx_index.next_tx_index();
        if tx_index == FEE_TX_INDEX {
            return Err(PlasmaError::Internal(
                "transaction index space of the block is exhausted".into(),
            ));
        }
        let block_height = self.blocks.next_plasma_block_height();
        let position = Position::utxo(block_height, tx_index, 0);

        // Every output position is assigned before anything is written
        let output_positions = (0..msg.outputs().len())
            .map(|i| {
                u8::try_from(i)
                    .map(|output_index| Position::utxo(block_height, tx_index, output_index))
                    .map_err(|_| {
                        PlasmaError::Internal(format!(
                            "{} outputs exceed the {MAX_TX_OUTPUTS} addressable positions",
                            msg.outputs().len()
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tx_hash = msg.tx_hash();
        let confirmation_hash = confirmation_hash(&msg.merkle_hash(), &ctx.data_hash);

        self.ledger.store_tx(TransactionRecord::new(
            msg.transaction.clone(),
            position,
            confirmation_hash,
        ))?;

        for input in msg.inputs() {
            let input_position = input.position;
            if input_position.is_deposit() {
                let nonce = input_position.deposit_nonce;
                let deposit = self.ledger.get_deposit(nonce).ok_or_else(|| {
                    PlasmaError::Internal(format!("deposit {nonce} missing from store"))
                })?;
                self.ledger.spend_deposit(nonce, tx_hash)?;
                self.ledger.spend_deposit_with_account(&deposit)?;
            } else {
                self.ledger.spend_utxo(&input_position, tx_hash)?;
            }
        }

        for (output_position, output) in output_positions.iter().zip(msg.outputs()) {
            self.ledger
                .store_utxo(*output_position, Utxo::unspent(output.clone()))?;
        }

        // Last step: the fee counter lives outside the ledger transaction
        ctx.fee_updater
            .update_fee(msg.fee())
            .map_err(|err| PlasmaError::Internal(format!("fee update failed: {err}")))?;

        Ok(SpendReceipt {
            tx_hash,
            position,
            output_positions,
            confirmation_hash,
        })
    }
}
