//! Heap and spanning-tree benchmarks
//!
//! Measures the indexed heap's three hot operations (insert, change_key,
//! extract_min) and the full Prim's run on grid graphs of increasing size.
//!
//! ```bash
//! cargo bench --bench heap_perf
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use prim_mst::graph::SimpleGraph;
use prim_mst::mst::minimum_spanning_tree;
use prim_mst::{IndexedMinHeap, KeyedMinHeap};

/// Deterministic pseudo-random u64 stream (splitmix64), seeded for
/// reproducible workloads without pulling in an RNG crate.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

fn bench_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");

    for size in [1_000usize, 10_000, 100_000] {
        let mut rng = SplitMix64(42);
        let priorities: Vec<u64> = (0..size).map(|_| rng.next()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &priorities, |b, priorities| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::new();
                for (key, &priority) in priorities.iter().enumerate() {
                    heap.insert(key, priority).unwrap();
                }
                while let Ok(entry) = heap.extract_min() {
                    black_box(entry);
                }
            })
        });
    }

    group.finish();
}

fn bench_change_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_key");

    for size in [1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::new();
                for key in 0..size {
                    heap.insert(key, (size + key) as u64).unwrap();
                }
                // Decrease every key below the current minimum, worst-case
                // full-height sift each time.
                for key in 0..size {
                    heap.change_key(&key, (size - key) as u64).unwrap();
                }
                black_box(heap.len())
            })
        });
    }

    group.finish();
}

/// Builds an n x n grid graph with deterministic pseudo-random weights.
fn grid_graph(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::new(false, true);
    let label = |x: usize, y: usize| format!("{x}_{y}");

    for y in 0..n {
        for x in 0..n {
            graph.add_vertex(&label(x, y));
        }
    }

    let mut rng = SplitMix64(7);
    for y in 0..n {
        for x in 0..n {
            let weight = (rng.next() % 1000) as f64 + 1.0;
            if x + 1 < n {
                graph.add_edge(&label(x, y), &label(x + 1, y), weight).unwrap();
            }
            if y + 1 < n {
                graph.add_edge(&label(x, y), &label(x, y + 1), weight).unwrap();
            }
        }
    }

    graph
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim_grid");
    group.sample_size(20);

    for n in [10usize, 30, 60] {
        let graph = grid_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &graph, |b, graph| {
            b.iter(|| {
                let tree = minimum_spanning_tree(black_box(graph), "0_0").unwrap();
                black_box(tree.vertex_count())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_extract, bench_change_key, bench_prim);
criterion_main!(benches);
