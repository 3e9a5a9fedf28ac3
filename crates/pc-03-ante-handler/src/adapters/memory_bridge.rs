use crate::ports::{DepositStatus, RootChainBridge};
use parking_lot::RwLock;
use shared_types::{Deposit, Position};
use std::collections::HashMap;

/// A deposit as seen by the bridge: spendable from `finalized_at` onwards.
#[derive(Debug, Clone)]
struct TrackedDeposit {
    deposit: Deposit,
    finalized_at: u64,
}

/// In-memory root-chain bridge for tests and local runs.
///
/// Finality and exits are keyed by plasma block height: a deposit queried
/// below its finality height reports the remaining block count, and an exit
/// recorded at height `h` is visible to every query at `h` or later.
#[derive(Default)]
pub struct InMemoryRootChainBridge {
    deposits: RwLock<HashMap<u64, TrackedDeposit>>,
    exits: RwLock<HashMap<Position, u64>>,
}

impl InMemoryRootChainBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deposit that is final at every height.
    pub fn finalize_deposit(&self, deposit: Deposit) {
        self.track_deposit(deposit, 0);
    }

    /// Records a deposit that becomes final at plasma height `finalized_at`.
    pub fn track_deposit(&self, deposit: Deposit, finalized_at: u64) {
        tracing::debug!(nonce = deposit.nonce, finalized_at, "bridge tracking deposit");
        self.deposits.write().insert(
            deposit.nonce,
            TrackedDeposit {
                deposit,
                finalized_at,
            },
        );
    }

    /// Records an exit visible at every height.
    pub fn mark_exited(&self, position: Position) {
        self.mark_exited_at(position, 0);
    }

    /// Records an exit processed at plasma height `height`.
    pub fn mark_exited_at(&self, position: Position, height: u64) {
        tracing::debug!(%position, height, "bridge recorded exit");
        self.exits.write().insert(position, height);
    }
}

impl RootChainBridge for InMemoryRootChainBridge {
    fn get_deposit(&self, height: u64, nonce: u64) -> DepositStatus {
        match self.deposits.read().get(&nonce) {
            None => DepositStatus::Unknown,
            Some(tracked) if tracked.finalized_at <= height => {
                DepositStatus::Finalized(tracked.deposit.clone())
            }
            Some(tracked) => DepositStatus::Pending {
                threshold: tracked.finalized_at - height,
            },
        }
    }

    fn has_tx_been_exited(&self, height: u64, position: &Position) -> bool {
        self.exits
            .read()
            .get(position)
            .is_some_and(|exited_at| *exited_at <= height)
    }
}
