//! Heap operation benchmarks.
//!
//! Measures each core operation across a range of heap sizes with
//! reproducible pseudo-random inputs. Heap construction and value generation
//! happen outside the timed section via `iter_batched`.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//! ```

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fibonacci_heap::{FibonacciHeap, MergeableHeap, NodeHandle};

const ELEMENT_COUNTS: [usize; 5] = [10_000, 20_000, 40_000, 80_000, 160_000];

// ============================================================================
// Simple PRNG for reproducible benchmarks
// ============================================================================

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_range(&mut self, min: u32, max: u32) -> u32 {
        let range = (max - min) as u64;
        if range == 0 {
            return min;
        }
        min + (self.next() % range) as u32
    }
}

fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| rng.next_range(0, 1_000_000) as i64)
        .collect()
}

fn build_heap(n: usize, seed: u64) -> FibonacciHeap<i64> {
    let mut heap = FibonacciHeap::new();
    heap.insert_all(random_values(n, seed));
    heap
}

fn build_heap_with_nodes(n: usize, seed: u64) -> (FibonacciHeap<i64>, Vec<NodeHandle>) {
    let mut heap = FibonacciHeap::new();
    let nodes = heap.insert_all(random_values(n, seed));
    (heap, nodes)
}

fn shuffle<T>(items: &mut [T], rng: &mut Lcg) {
    for i in (1..items.len()).rev() {
        let j = (rng.next() % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.sample_size(10);
    for &n in &ELEMENT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || random_values(n, 42),
                |values| {
                    let mut heap = FibonacciHeap::new();
                    for v in values {
                        black_box(heap.insert(v));
                    }
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn benchmark_delete_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_min");
    group.sample_size(10);
    for &n in &ELEMENT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || build_heap(n, 42),
                |mut heap| {
                    while let Some(v) = heap.delete_min() {
                        black_box(v);
                    }
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn benchmark_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    group.sample_size(10);
    for &n in &ELEMENT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || build_heap_with_nodes(n, 42),
                |(mut heap, nodes)| {
                    for node in &nodes {
                        let v = *heap.get(node).unwrap();
                        heap.decrease_key(node, v - 1).unwrap();
                    }
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn benchmark_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    group.sample_size(10);
    for &n in &ELEMENT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || (build_heap(n, 7), build_heap(n, 99)),
                |(mut left, right)| {
                    left.union(right);
                    left
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn benchmark_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.sample_size(10);
    for &n in &ELEMENT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let (heap, mut nodes) = build_heap_with_nodes(n, 42);
                    let mut rng = Lcg::new(1234);
                    shuffle(&mut nodes, &mut rng);
                    (heap, nodes)
                },
                |(mut heap, nodes)| {
                    for node in &nodes {
                        black_box(heap.delete(node).unwrap());
                    }
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_delete_min,
    benchmark_decrease_key,
    benchmark_union,
    benchmark_delete,
);

criterion_main!(benches);
