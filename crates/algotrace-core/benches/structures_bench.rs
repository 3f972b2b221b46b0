//! Benchmarks for the priority queue and disjoint-set.

use algotrace_common::types::VertexId;
use algotrace_core::{DisjointSet, Graph, PriorityQueue};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");
    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("insert_extract", size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(size);
                for i in 0..size {
                    // Scatter priorities so the heap actually reorders.
                    queue.insert(i, ((i * 7919) % size) as f64);
                }
                while let Some(item) = queue.pop() {
                    black_box(item);
                }
            });
        });
    }
    group.finish();
}

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_set");
    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("union_chain", size), &size, |b, &size| {
            b.iter(|| {
                let mut set: DisjointSet<usize> = (0..size).collect();
                for i in 1..size {
                    set.union(&(i - 1), &i);
                }
                black_box(set.find(&0).copied());
            });
        });
    }
    group.finish();
}

fn bench_graph_build(c: &mut Criterion) {
    c.bench_function("graph_build_grid_30x30", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            let id = |r: usize, c: usize| VertexId::from(r * 30 + c);
            for r in 0..30 {
                for c in 0..30 {
                    graph.add_vertex(id(r, c));
                }
            }
            for r in 0..30 {
                for c in 0..30 {
                    if c + 1 < 30 {
                        let _ = graph.add_edge(id(r, c), id(r, c + 1), 1.0, false);
                    }
                    if r + 1 < 30 {
                        let _ = graph.add_edge(id(r, c), id(r + 1, c), 1.0, false);
                    }
                }
            }
            black_box(graph.edge_count());
        });
    });
}

criterion_group!(
    benches,
    bench_priority_queue,
    bench_disjoint_set,
    bench_graph_build
);
criterion_main!(benches);
