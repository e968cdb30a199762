use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use graph_lab::algorithm::{
    coloring::vertex_coloring, dijkstra::shortest_path, heuristic::hamiltonian_cycle,
    matching::maximum_matching, spanning_tree::minimum_spanning_tree,
};
use graph_lab::graph::generators::{generate_grid, generate_random};

fn random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [25usize, 100, 200] {
        let graph = generate_random(size, 6.0 / size as f64, &mut rng);

        group.bench_with_input(BenchmarkId::new("shortest_path", size), &graph, |b, g| {
            b.iter(|| shortest_path(black_box(g), 1, size))
        });
        group.bench_with_input(BenchmarkId::new("minimum_spanning_tree", size), &graph, |b, g| {
            b.iter(|| minimum_spanning_tree(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("vertex_coloring", size), &graph, |b, g| {
            b.iter(|| vertex_coloring(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("maximum_matching", size), &graph, |b, g| {
            b.iter(|| maximum_matching(black_box(g)))
        });
    }

    group.finish();
}

fn grid_hamiltonian(c: &mut Criterion) {
    let graph = generate_grid(6, 6);
    c.bench_function("hamiltonian_cycle_grid_6x6", |b| {
        b.iter(|| hamiltonian_cycle(black_box(&graph)))
    });
}

criterion_group!(benches, random_graphs, grid_hamiltonian);
criterion_main!(benches);
