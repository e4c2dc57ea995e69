use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use bank_account::{Account, AccountNumbers};

/// Repeating pattern per step: deposit 100, deposit 50, withdraw 30.
/// Withdrawals never exceed the balance.
fn run_operations(account: &mut Account, ops: u32) {
    for step in 0..ops {
        let result = match step % 3 {
            0 => account.deposit(100.0),
            1 => account.deposit(50.0),
            _ => account.withdraw(30.0),
        };
        black_box(result.unwrap());
    }
}

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    let numbers = AccountNumbers::default();

    for ops in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(ops), &ops, |b, &ops| {
            b.iter(|| {
                let mut account = Account::from_balance_in(&numbers, "bench", 0.0).unwrap();
                run_operations(&mut account, ops);
                account
            });
        });
    }

    group.finish();
}

fn bench_transfers(c: &mut Criterion) {
    let numbers = AccountNumbers::default();

    c.bench_function("transfer_back_and_forth_1000", |b| {
        b.iter(|| {
            let mut left = Account::from_balance_in(&numbers, "left", 1_000.0).unwrap();
            let mut right = Account::from_balance_in(&numbers, "right", 1_000.0).unwrap();
            for _ in 0..500 {
                left.transfer(10.0, &mut right).unwrap();
                right.transfer(10.0, &mut left).unwrap();
            }
            (left, right)
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let numbers = AccountNumbers::default();

    c.bench_function("from_string", |b| {
        b.iter(|| Account::from_string_in(&numbers, black_box("Bob Wilson;750;active")).unwrap());
    });
}

criterion_group!(benches, bench_operations, bench_transfers, bench_parse);
criterion_main!(benches);
