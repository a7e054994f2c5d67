//! Criterion micro-benchmarks for bounds-checked reads, writes and inserts.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use vecsafe_bench::{filled_sequence, sample_indices, LARGE, SMALL};
use vecsafe_core::SafeVec;

/// Benchmark: safe_get over a mix of valid and invalid indices.
fn bench_get(c: &mut Criterion) {
    let s = filled_sequence(LARGE);
    let samples = sample_indices(LARGE);
    c.bench_function("safe_get_samples_10k", |b| {
        b.iter(|| {
            for &i in &samples {
                black_box(s.safe_get(black_box(i)));
            }
        });
    });
}

/// Benchmark: In-place overwrite through safe_set.
fn bench_set(c: &mut Criterion) {
    let mut s = filled_sequence(LARGE);
    c.bench_function("safe_set_middle_10k", |b| {
        b.iter(|| s.safe_set(black_box(LARGE / 2), Some(black_box(7))));
    });
}

/// Benchmark: Insert at the front of a small sequence.
fn bench_insert(c: &mut Criterion) {
    let base = filled_sequence(SMALL);
    c.bench_function("safe_insert_front_64", |b| {
        b.iter_batched(
            || base.clone(),
            |mut s| {
                s.safe_insert(black_box(1), 0usize);
                s
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: Taking drop_first / drop_last views.
fn bench_drop_views(c: &mut Criterion) {
    let s = filled_sequence(LARGE);
    c.bench_function("safe_drop_views_10k", |b| {
        b.iter(|| {
            black_box(s.safe_drop_first(black_box(3)));
            black_box(s.safe_drop_last(black_box(-3)));
        });
    });
}

criterion_group!(benches, bench_get, bench_set, bench_insert, bench_drop_views);
criterion_main!(benches);
