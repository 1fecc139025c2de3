//! Benchmarks for the dice loop
//!
//! Run with: cargo bench --package game

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use game::{check_for_win, roll_until_win, RandomDice};

fn bench_check_for_win(c: &mut Criterion) {
    let no_repeat = [1u8, 2, 3, 4, 5, 6];
    let late_repeat = [1u8, 2, 3, 4, 5, 6, 6];

    c.bench_function("check_for_win_no_repeat", |b| {
        b.iter(|| black_box(check_for_win(black_box(&no_repeat))))
    });

    c.bench_function("check_for_win_late_repeat", |b| {
        b.iter(|| black_box(check_for_win(black_box(&late_repeat))))
    });
}

fn bench_roll_until_win(c: &mut Criterion) {
    let mut dice = RandomDice::seeded(1);

    c.bench_function("roll_until_win", |b| {
        b.iter(|| {
            let result = roll_until_win(&mut dice);
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_check_for_win, bench_roll_until_win);
criterion_main!(benches);
