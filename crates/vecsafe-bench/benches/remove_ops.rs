//! Criterion micro-benchmarks comparing the shift and rebuild removal paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use vecsafe_bench::{filled_sequence, LARGE, SMALL};
use vecsafe_core::ops;

/// Benchmark: Remove from the front (worst case for the shift path).
fn bench_remove_front(c: &mut Criterion) {
    for len in [SMALL, LARGE] {
        let base = filled_sequence(len);
        c.bench_function(&format!("remove_front_{len}"), |b| {
            b.iter_batched(
                || base.clone(),
                |mut s| black_box(ops::remove(&mut s, 0usize)),
                BatchSize::SmallInput,
            );
        });
        c.bench_function(&format!("remove_slowly_front_{len}"), |b| {
            b.iter_batched(
                || base.clone(),
                |mut s| black_box(ops::remove_slowly(&mut s, 0usize)),
                BatchSize::SmallInput,
            );
        });
    }
}

/// Benchmark: Remove the last element. The shift path moves nothing; the
/// rebuild path still visits every element.
fn bench_remove_back(c: &mut Criterion) {
    let base = filled_sequence(LARGE);
    c.bench_function("remove_back_10k", |b| {
        b.iter_batched(
            || base.clone(),
            |mut s| black_box(ops::remove(&mut s, LARGE - 1)),
            BatchSize::SmallInput,
        );
    });
    c.bench_function("remove_slowly_back_10k", |b| {
        b.iter_batched(
            || base.clone(),
            |mut s| black_box(ops::remove_slowly(&mut s, LARGE - 1)),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: Rejected removal, which leaves the sequence untouched.
fn bench_remove_rejected(c: &mut Criterion) {
    let mut s = filled_sequence(LARGE);
    c.bench_function("remove_rejected_10k", |b| {
        b.iter(|| black_box(ops::remove(&mut s, black_box(-1i64))));
    });
}

criterion_group!(
    benches,
    bench_remove_front,
    bench_remove_back,
    bench_remove_rejected
);
criterion_main!(benches);
