//! # Deposit Lifecycle
//!
//! Bridge finality gating, inclusion, the first spend of a deposit and the
//! account credit it produces.

#[cfg(test)]
mod tests {
    use crate::fixtures::{include_deposit, signed_spend, Account, Chain};
    use pc_02_ledger_store::{DepositStore, UtxoStore};
    use shared_types::{Deposit, ErrorKind, Input, Output, PlasmaError, Position, U256};

    #[test]
    fn test_deposit_inclusion_then_spend() {
        let chain = Chain::new();
        let alice = Account::random();
        let bob = Account::random();
        chain
            .bridge
            .finalize_deposit(Deposit::new(1, alice.address, 100u64));

        assert_eq!(chain.submit(&include_deposit(1, &alice)), Ok(None));
        assert!(chain.ledger.has_deposit(1));

        let spend = signed_spend(
            vec![Input::unconfirmed(Position::deposit(1))],
            vec![Output::new(alice.address, 40u64), Output::new(bob.address, 50u64)],
            10,
            &[&alice],
        );
        let receipt = chain.submit_spend(&spend).unwrap();

        assert_eq!(receipt.position, Position::utxo(1, 0, 0));
        let a = chain.ledger.get_utxo(&Position::utxo(1, 0, 0)).unwrap();
        let b = chain.ledger.get_utxo(&Position::utxo(1, 0, 1)).unwrap();
        assert_eq!(a.output, Output::new(alice.address, 40u64));
        assert_eq!(b.output, Output::new(bob.address, 50u64));
        assert!(!a.spent && !b.spent);

        let deposit = chain.ledger.get_deposit(1).unwrap();
        assert!(deposit.spent);
        assert_eq!(deposit.spender, Some(receipt.tx_hash));
        assert_eq!(chain.ledger.account_balance(&alice.address), U256::from(100u64));
        assert_eq!(chain.block.fees.total(), U256::from(10u64));
    }

    #[test]
    fn test_deposit_inclusion_is_idempotent() {
        let chain = Chain::new();
        let alice = Account::random();
        chain
            .bridge
            .finalize_deposit(Deposit::new(2, alice.address, 5u64));

        chain.submit(&include_deposit(2, &alice)).unwrap();
        let err = chain.submit(&include_deposit(2, &alice)).unwrap_err();
        assert_eq!(err, PlasmaError::DepositExists(2));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_deposit_spent_only_once() {
        let chain = Chain::new();
        let alice = Account::random();
        chain
            .bridge
            .finalize_deposit(Deposit::new(1, alice.address, 10u64));
        chain.submit(&include_deposit(1, &alice)).unwrap();

        let spend = signed_spend(
            vec![Input::unconfirmed(Position::deposit(1))],
            vec![Output::new(alice.address, 10u64)],
            0,
            &[&alice],
        );
        chain.submit_spend(&spend).unwrap();

        let err = chain.submit(&spend).unwrap_err();
        assert_eq!(err, PlasmaError::InputAlreadySpent(Position::deposit(1)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(chain.ledger.account_balance(&alice.address), U256::from(10u64));
    }

    #[test]
    fn test_finality_gating() {
        let mut chain = Chain::new();
        let alice = Account::random();
        chain
            .bridge
            .track_deposit(Deposit::new(4, alice.address, 1u64), 3);

        let err = chain.submit(&include_deposit(4, &alice)).unwrap_err();
        assert!(err.to_string().contains("at least 3 blocks"));
        assert_eq!(err.kind(), ErrorKind::InvalidTransaction);

        chain.commit_block();
        let err = chain.submit(&include_deposit(4, &alice)).unwrap_err();
        assert_eq!(
            err,
            PlasmaError::DepositNotFinalized {
                nonce: 4,
                threshold: 2
            }
        );

        chain.commit_block();
        chain.commit_block();
        assert_eq!(chain.submit(&include_deposit(4, &alice)), Ok(None));
    }

    #[test]
    fn test_unknown_and_foreign_deposits_rejected() {
        let chain = Chain::new();
        let alice = Account::random();
        let mallory = Account::random();
        chain
            .bridge
            .finalize_deposit(Deposit::new(1, alice.address, 1u64));

        let err = chain.submit(&include_deposit(9, &alice)).unwrap_err();
        assert_eq!(err, PlasmaError::DepositNotFound(9));

        let err = chain.submit(&include_deposit(1, &mallory)).unwrap_err();
        assert!(matches!(err, PlasmaError::DepositOwnerMismatch { .. }));
        assert!(!chain.ledger.has_deposit(1));
    }

    #[test]
    fn test_exited_deposit() {
        let chain = Chain::new();
        let alice = Account::random();
        chain
            .bridge
            .finalize_deposit(Deposit::new(1, alice.address, 1u64));
        chain
            .bridge
            .finalize_deposit(Deposit::new(2, alice.address, 1u64));

        // Exited before inclusion
        chain.bridge.mark_exited(Position::deposit(1));
        let err = chain.submit(&include_deposit(1, &alice)).unwrap_err();
        assert_eq!(err, PlasmaError::DepositExited(1));

        // Exited after inclusion
        chain.submit(&include_deposit(2, &alice)).unwrap();
        chain.bridge.mark_exited(Position::deposit(2));
        let spend = signed_spend(
            vec![Input::unconfirmed(Position::deposit(2))],
            vec![Output::new(alice.address, 1u64)],
            0,
            &[&alice],
        );
        let err = chain.submit(&spend).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExitedInput);
        assert!(!chain.ledger.get_deposit(2).unwrap().spent);
    }
}
