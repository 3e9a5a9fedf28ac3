//! # Plasma Core Benchmarks
//!
//! | Path | Measured |
//! |------|----------|
//! | Signer recovery | ECDSA public-key recovery per spend |
//! | Admission | Full ante checks of a deposit spend |
//! | Apply | Admission plus state transition on a fresh ledger |

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pc_01_signature_verification::RecoverSigners;
use pc_tests::fixtures::{include_deposit, signed_spend, Account, Chain};
use shared_types::{Deposit, Input, Msg, Output, Position};

fn funded_chain(owner: &Account) -> Chain {
    let chain = Chain::new();
    for nonce in 1..=2 {
        chain
            .bridge
            .finalize_deposit(Deposit::new(nonce, owner.address, 100u64));
        chain
            .submit(&include_deposit(nonce, owner))
            .expect("deposit inclusion");
    }
    chain
}

fn two_deposit_spend(owner: &Account, to: &Account) -> Msg {
    signed_spend(
        vec![
            Input::unconfirmed(Position::deposit(1)),
            Input::unconfirmed(Position::deposit(2)),
        ],
        vec![Output::new(to.address, 190u64)],
        10,
        &[owner, owner],
    )
}

fn bench_signer_recovery(c: &mut Criterion) {
    let alice = Account::random();
    let bob = Account::random();
    let Msg::Spend(spend) = two_deposit_spend(&alice, &bob) else {
        unreachable!("builder returns a spend")
    };

    c.bench_function("recover_two_signers", |b| {
        b.iter(|| black_box(spend.signers()))
    });
}

fn bench_admission(c: &mut Criterion) {
    let alice = Account::random();
    let bob = Account::random();
    let chain = funded_chain(&alice);
    let msg = two_deposit_spend(&alice, &bob);

    c.bench_function("admit_two_input_spend", |b| {
        b.iter(|| black_box(chain.ante.admit(&msg)))
    });
}

fn bench_apply(c: &mut Criterion) {
    let alice = Account::random();
    let bob = Account::random();
    let msg = two_deposit_spend(&alice, &bob);

    c.bench_function("submit_two_input_spend", |b| {
        b.iter_with_setup(
            || funded_chain(&alice),
            |chain| black_box(chain.submit(&msg)),
        )
    });
}

criterion_group!(benches, bench_signer_recovery, bench_admission, bench_apply);
criterion_main!(benches);
