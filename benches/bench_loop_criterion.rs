//! Compares the overhead of [`measured_loop`] against criterion's own iteration loop.

use criterion::{criterion_group, criterion_main, Criterion};
use measured_loop::{loop_nullary, loop_with_state, BlackHole, Measured};
use std::{hint::black_box, time::Duration};

const EVAL_COUNTS: [i64; 3] = [1, 100, 10_000];

fn work(x: u64) -> u64 {
    (0..black_box(x)).fold(0, |acc, i| acc.wrapping_mul(31).wrapping_add(i))
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("criterion_iter(work)", |b| b.iter(|| work(64)));

    for eval_count in EVAL_COUNTS {
        c.bench_function(&format!("loop_nullary(eval_count={eval_count})"), |b| {
            let mut sink = BlackHole::new();
            b.iter_custom(|iters| {
                let mut total = 0;
                for _ in 0..iters {
                    total += loop_nullary(&mut sink, eval_count, || work(64));
                }
                Duration::from_nanos(total / eval_count as u64)
            })
        });

        c.bench_function(&format!("loop_with_state(eval_count={eval_count})"), |b| {
            let mut sink = BlackHole::new();
            let state = 64u64;
            b.iter_custom(|iters| {
                let mut total = 0;
                for _ in 0..iters {
                    total += loop_with_state(&mut sink, eval_count, |x: &u64| work(*x), &state);
                }
                Duration::from_nanos(total / eval_count as u64)
            })
        });
    }

    c.bench_function("measured_batch(eval_count=100)", |b| {
        let mut sink = BlackHole::new();
        let mut measured = Measured::new(|| 64u64, |x: &u64| work(*x));
        b.iter(|| measured.batch(&mut sink, 100))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
