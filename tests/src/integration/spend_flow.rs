//! # Spend Flows
//!
//! Multi-block spend chains with confirm signatures, exit-aware rejections
//! and the fee rules of the first input.

#[cfg(test)]
mod tests {
    use crate::fixtures::{include_deposit, signed_spend, Account, Chain};
    use pc_02_ledger_store::UtxoStore;
    use pc_03_ante_handler::AnteConfig;
    use pc_04_spend_handler::SpendReceipt;
    use shared_types::{
        Deposit, ErrorKind, Input, Msg, Output, PlasmaError, Position, U256,
    };

    /// Deposit 110 for `owner`, split it into `50@owner` and `60@owner` in
    /// block 1, then commit the block.
    fn fund(chain: &mut Chain, owner: &Account) -> SpendReceipt {
        chain
            .bridge
            .finalize_deposit(Deposit::new(1, owner.address, 110u64));
        chain.submit(&include_deposit(1, owner)).unwrap();

        let split = signed_spend(
            vec![Input::unconfirmed(Position::deposit(1))],
            vec![Output::new(owner.address, 50u64), Output::new(owner.address, 60u64)],
            0,
            &[owner],
        );
        let receipt = chain.submit_spend(&split).unwrap();
        chain.commit_block();
        receipt
    }

    fn spend_both(
        owner: &Account,
        funding: &SpendReceipt,
        outputs: Vec<Output>,
        fee: u64,
    ) -> Msg {
        let confirm = owner.sign(&funding.confirmation_hash);
        signed_spend(
            vec![
                Input::new(funding.output_positions[0], vec![confirm]),
                Input::new(funding.output_positions[1], vec![confirm]),
            ],
            outputs,
            fee,
            &[owner, owner],
        )
    }

    #[test]
    fn test_two_utxo_spend() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let carol = Account::random();
        let funding = fund(&mut chain, &alice);

        let overdrawn = spend_both(&alice, &funding, vec![Output::new(carol.address, 70u64)], 10);
        let err = chain.submit(&overdrawn).unwrap_err();
        assert!(matches!(err, PlasmaError::Unbalanced { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidTransaction);

        let fee_too_high =
            spend_both(&alice, &funding, vec![Output::new(carol.address, 50u64)], 60);
        let err = chain.submit(&fee_too_high).unwrap_err();
        assert_eq!(
            err,
            PlasmaError::InsufficientFee {
                fee: U256::from(60u64),
                amount: U256::from(50u64)
            }
        );

        let ok = spend_both(&alice, &funding, vec![Output::new(carol.address, 100u64)], 10);
        let receipt = chain.submit_spend(&ok).unwrap();

        assert_eq!(receipt.position, Position::utxo(2, 0, 0));
        let out = chain.ledger.get_utxo(&Position::utxo(2, 0, 0)).unwrap();
        assert_eq!(out.output, Output::new(carol.address, 100u64));
        for position in &funding.output_positions {
            let spent = chain.ledger.get_utxo(position).unwrap();
            assert!(spent.spent);
            assert_eq!(spent.spender, Some(receipt.tx_hash));
        }
        assert_eq!(chain.block.fees.total(), U256::from(10u64));
    }

    #[test]
    fn test_double_spend_after_apply() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let bob = Account::random();
        let funding = fund(&mut chain, &alice);

        let pay = spend_both(&alice, &funding, vec![Output::new(bob.address, 110u64)], 0);
        chain.submit_spend(&pay).unwrap();

        // Same inputs, different outputs
        let again = spend_both(&alice, &funding, vec![Output::new(alice.address, 110u64)], 0);
        let err = chain.submit(&again).unwrap_err();
        assert_eq!(err, PlasmaError::InputAlreadySpent(funding.output_positions[0]));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_spend_chain_across_blocks() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let bob = Account::random();
        let carol = Account::random();
        let funding = fund(&mut chain, &alice);

        let to_bob = spend_both(
            &alice,
            &funding,
            vec![Output::new(bob.address, 100u64), Output::new(alice.address, 10u64)],
            0,
        );
        let bob_receipt = chain.submit_spend(&to_bob).unwrap();
        chain.commit_block();

        // Bob's output was produced by a two-input transaction owned by alice:
        // both confirm signatures come from alice.
        let confirm = alice.sign(&bob_receipt.confirmation_hash);
        let to_carol = signed_spend(
            vec![Input::new(bob_receipt.output_positions[0], vec![confirm, confirm])],
            vec![Output::new(carol.address, 99u64)],
            1,
            &[&bob],
        );
        let receipt = chain.submit_spend(&to_carol).unwrap();
        assert_eq!(receipt.position, Position::utxo(3, 0, 0));

        let record = chain
            .ledger
            .get_tx_with_position(&bob_receipt.output_positions[0])
            .unwrap();
        assert_eq!(record.spent, vec![true, false]);
    }

    #[test]
    fn test_confirm_signature_from_wrong_owner() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let bob = Account::random();
        let funding = fund(&mut chain, &alice);

        let forged = bob.sign(&funding.confirmation_hash);
        let msg = signed_spend(
            vec![Input::new(funding.output_positions[0], vec![forged])],
            vec![Output::new(bob.address, 50u64)],
            0,
            &[&alice],
        );
        let err = chain.submit(&msg).unwrap_err();
        assert_eq!(
            err,
            PlasmaError::ConfirmSignatureMismatch {
                expected: alice.address,
                actual: bob.address
            }
        );
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_missing_confirm_signatures() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let funding = fund(&mut chain, &alice);

        let msg = signed_spend(
            vec![Input::unconfirmed(funding.output_positions[0])],
            vec![Output::new(alice.address, 50u64)],
            0,
            &[&alice],
        );
        let err = chain.submit(&msg).unwrap_err();
        assert!(matches!(err, PlasmaError::ConfirmSignatureCount { expected: 1, actual: 0, .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidTransaction);
    }

    #[test]
    fn test_exit_precedence() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let funding = fund(&mut chain, &alice);

        chain.bridge.mark_exited(funding.output_positions[1]);
        let msg = spend_both(&alice, &funding, vec![Output::new(alice.address, 110u64)], 0);
        let err = chain.submit(&msg).unwrap_err();
        assert_eq!(err, PlasmaError::InputExited(funding.output_positions[1]));
        assert_eq!(err.kind(), ErrorKind::ExitedInput);
        assert!(!chain.ledger.get_utxo(&funding.output_positions[0]).unwrap().spent);
    }

    #[test]
    fn test_exited_parent_input_poisons_children() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let funding = fund(&mut chain, &alice);

        chain.bridge.mark_exited(Position::deposit(1));
        let msg = spend_both(&alice, &funding, vec![Output::new(alice.address, 110u64)], 0);
        let err = chain.submit(&msg).unwrap_err();
        assert_eq!(err, PlasmaError::ParentInputExited(Position::deposit(1)));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_stolen_input_rejected() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let mallory = Account::random();
        let funding = fund(&mut chain, &alice);

        let confirm = alice.sign(&funding.confirmation_hash);
        let msg = signed_spend(
            vec![Input::new(funding.output_positions[0], vec![confirm])],
            vec![Output::new(mallory.address, 50u64)],
            0,
            &[&mallory],
        );
        let err = chain.submit(&msg).unwrap_err();
        assert!(matches!(err, PlasmaError::InputNotOwned { .. }));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_single_msg_per_transaction() {
        let mut chain = Chain::new();
        let alice = Account::random();
        let funding = fund(&mut chain, &alice);
        let msg = spend_both(&alice, &funding, vec![Output::new(alice.address, 110u64)], 0);

        assert_eq!(chain.ante.admit_tx(&[msg.clone()]), Ok(()));
        let err = chain.ante.admit_tx(&[msg.clone(), msg]).unwrap_err();
        assert_eq!(err, PlasmaError::MsgCount(2));
        assert_eq!(err.kind(), ErrorKind::InvalidTransaction);
    }

    #[test]
    fn test_configured_input_limit() {
        let config = AnteConfig::from_toml_str("[limits]\nmax_inputs = 1").unwrap();
        let mut chain = Chain::with_config(config);
        let alice = Account::random();
        let funding = fund(&mut chain, &alice);

        let msg = spend_both(&alice, &funding, vec![Output::new(alice.address, 110u64)], 0);
        let err = chain.submit(&msg).unwrap_err();
        assert!(matches!(err, PlasmaError::Malformed(_)));
    }
}
