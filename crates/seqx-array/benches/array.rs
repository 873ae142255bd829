//! Dynamic array performance benchmarks.
//!
//! Measures the cost of:
//! - Amortized appends across the doubling growth schedule
//! - Pop-driven drain with the quarter-full shrink rule
//! - Linear find
//! - Front insertion (full shift path)

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqx_array::DynArray;

fn bench_push_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_growth");

    for size in [10, 100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynArray::new();
                for n in 0..size {
                    arr.push(black_box(n));
                }
                black_box(arr.capacity())
            });
        });
    }

    group.finish();
}

fn bench_pop_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_drain");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynArray::new();
                for n in 0..size {
                    arr.push(n);
                }
                while let Ok(value) = arr.pop() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut arr = DynArray::new();
            for n in 0..size {
                arr.push(n);
            }
            let missing = size;

            b.iter(|| {
                // Worst case: scan the whole prefix.
                black_box(arr.find(&missing));
                black_box(arr.find(&(size / 2)));
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [10, 100, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynArray::new();
                arr.push(0);
                for n in 1..size {
                    arr.insert_at(0, black_box(n)).unwrap();
                }
                black_box(arr.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_growth,
    bench_pop_drain,
    bench_find,
    bench_insert_front
);
criterion_main!(benches);
