//! Criterion benchmarks for ordgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use ordgraph::graph::{DirectedGraph, Graph, UndirectedGraph};
use ordgraph::tree::OrderedTree;

/// Random values for tree insertion.
fn random_values(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..1_000_000)).collect()
}

/// Random connection pairs over `vertex_count` vertices.
fn random_connections(vertex_count: u32, edges_per_vertex: usize) -> Vec<(u32, u32)> {
    let mut rng = rand::thread_rng();
    let mut connections = Vec::with_capacity(vertex_count as usize * edges_per_vertex);
    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            connections.push((v, rng.gen_range(0..vertex_count)));
        }
    }
    connections
}

fn bench_tree_insert(c: &mut Criterion) {
    let values = random_values(10_000);
    c.bench_function("tree_insert_10k", |b| {
        b.iter(|| OrderedTree::from_values(black_box(values.iter().copied())))
    });
}

fn bench_tree_search(c: &mut Criterion) {
    let values = random_values(10_000);
    let tree = OrderedTree::from_values(values.iter().copied()).unwrap();
    c.bench_function("tree_search_10k", |b| {
        b.iter(|| {
            let mut hits = 0;
            for v in values.iter().step_by(10) {
                if tree.contains(black_box(v)) {
                    hits += 1;
                }
            }
            hits
        })
    });
}

fn bench_graph_build(c: &mut Criterion) {
    let connections = random_connections(1_000, 5);
    c.bench_function("graph_build_1k_undirected", |b| {
        b.iter(|| UndirectedGraph::from_connections(black_box(connections.iter().copied())))
    });
}

fn bench_bfs(c: &mut Criterion) {
    let connections = random_connections(10_000, 3);
    let undirected = UndirectedGraph::from_connections(connections.iter().copied());
    let directed = DirectedGraph::from_connections(connections.iter().copied());

    c.bench_function("bfs_traverse_10k", |b| {
        b.iter(|| undirected.traverse(black_box(&0)))
    });
    c.bench_function("bfs_path_10k", |b| {
        b.iter(|| directed.shortest_path(black_box(&0), black_box(&9_999)))
    });
}

criterion_group!(
    benches,
    bench_tree_insert,
    bench_tree_search,
    bench_graph_build,
    bench_bfs
);
criterion_main!(benches);
