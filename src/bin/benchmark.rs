use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use graph_lab::algorithm::{
    coloring::vertex_coloring, dijkstra::shortest_path, euler::eulerian_tour,
    heuristic::hamiltonian_cycle, matching::maximum_matching,
    spanning_tree::minimum_spanning_tree,
};
use graph_lab::graph::generators::generate_random;
use graph_lab::graph::{Graph, UndirectedGraph};

type G = UndirectedGraph<OrderedFloat<f64>>;

// Function to time one algorithm on a graph
fn benchmark_algorithm<F, R>(name: &str, graph: &G, run: F) -> Duration
where
    F: FnOnce(&G) -> R,
{
    let start = Instant::now();
    let _ = std::hint::black_box(run(graph));
    let duration = start.elapsed();

    println!("  - {:<24} {:?}", name, duration);
    duration
}

fn main() {
    env_logger::init();

    // Interactive sizes: tens to low hundreds of nodes
    let graph_sizes = vec![10, 50, 100, 200, 400];

    // Expected average degree of the random graphs
    let average_degree = 4.0;

    println!("=====================================================");
    println!("Benchmark: graph algorithms on G(n, p) graphs");
    println!("Average degree: {}", average_degree);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let p = (average_degree / (size as f64 - 1.0)).min(1.0);
        let graph = generate_random(size, p, &mut rng);
        let (first, last) = (1, size);

        println!(
            "\nGraph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let timings = [
            benchmark_algorithm("shortest path", &graph, |g| shortest_path(g, first, last)),
            benchmark_algorithm("minimum spanning tree", &graph, minimum_spanning_tree),
            benchmark_algorithm("vertex coloring", &graph, vertex_coloring),
            benchmark_algorithm("eulerian tour", &graph, eulerian_tour),
            benchmark_algorithm("hamiltonian (heuristic)", &graph, hamiltonian_cycle),
            benchmark_algorithm("maximum matching", &graph, maximum_matching),
        ];

        results.push((size, timings));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results (microseconds)");
    println!("=====================================================");
    println!(
        "{:<8} | {:>9} | {:>9} | {:>9} | {:>9} | {:>9} | {:>9}",
        "Vertices", "Dijkstra", "MST", "Coloring", "Euler", "Hamilton", "Matching"
    );
    println!("-----------------------------------------------------");

    for (size, timings) in &results {
        let micros: Vec<u128> = timings.iter().map(|t| t.as_micros()).collect();
        println!(
            "{:<8} | {:>9} | {:>9} | {:>9} | {:>9} | {:>9} | {:>9}",
            size, micros[0], micros[1], micros[2], micros[3], micros[4], micros[5]
        );
    }
}
