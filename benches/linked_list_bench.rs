//! Benchmark for LinkedList vs standard VecDeque.
//!
//! Compares slink's arena-backed list against Rust's standard VecDeque
//! for common operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slink::LinkedList;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// push_back Benchmark
// =============================================================================

fn benchmark_push_back(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_back");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        list.push_back(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_back(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// push_front Benchmark
// =============================================================================

fn benchmark_push_front(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_front");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        list.push_front(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_front(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// remove Benchmark (worst case: match at the tail)
// =============================================================================

fn benchmark_remove_at_tail(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_at_tail");

    for size in [100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (0..size).collect::<LinkedList<i32>>(),
                    |mut list| {
                        list.remove(black_box(&(size - 1))).unwrap();
                        black_box(list)
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (0..size).collect::<VecDeque<i32>>(),
                    |mut deque| {
                        let position = deque
                            .iter()
                            .position(|element| *element == black_box(size - 1))
                            .unwrap();
                        black_box(deque.remove(position));
                        black_box(deque)
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

// =============================================================================
// Traversal Benchmark
// =============================================================================

fn benchmark_iterate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iterate");

    for size in [100, 1000, 10000] {
        let list: LinkedList<i32> = (0..size).collect();
        let deque: VecDeque<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &list, |bencher, list| {
            bencher.iter(|| {
                let sum: i32 = list.iter().sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &deque, |bencher, deque| {
            bencher.iter(|| {
                let sum: i32 = deque.iter().sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_back,
    benchmark_push_front,
    benchmark_remove_at_tail,
    benchmark_iterate
);
criterion_main!(benches);
