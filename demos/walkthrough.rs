use colored::*;
use graph_lab::algorithm::coloring::{color_count, vertex_coloring};
use graph_lab::algorithm::heuristic::hamiltonian_cycle;
use graph_lab::graph::{Graph, MutableGraph, UndirectedGraph};
use graph_lab::{eulerian_tour, maximum_matching, minimum_spanning_tree, shortest_path};
use ordered_float::OrderedFloat;

fn paint(text: String, color: usize) -> ColoredString {
    match color % 6 {
        0 => text.bright_red().bold(),
        1 => text.bright_green().bold(),
        2 => text.bright_blue().bold(),
        3 => text.bright_yellow().bold(),
        4 => text.bright_magenta().bold(),
        _ => text.bright_cyan().bold(),
    }
}

fn main() {
    // A house shape: square 1-2-3-4 with a roof 3-5-4
    let mut graph = UndirectedGraph::new();
    for _ in 0..5 {
        graph.add_vertex();
    }

    graph.add_edge(1, 2, OrderedFloat(4.0));
    graph.add_edge(2, 3, OrderedFloat(1.0));
    graph.add_edge(3, 4, OrderedFloat(2.0));
    graph.add_edge(4, 1, OrderedFloat(3.0));
    graph.add_edge(3, 5, OrderedFloat(1.0));
    graph.add_edge(4, 5, OrderedFloat(1.0));

    println!("{}", "--- Graph Lab walkthrough ---".bright_white().bold());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let route = shortest_path(&graph, 1, 5);
    println!(
        "\n{} 1 -> 5: {:?} (distance {:.1})",
        "Shortest path".bright_yellow().bold(),
        route.path,
        route.distance.into_inner()
    );

    let tree = minimum_spanning_tree(&graph);
    println!(
        "{} weight {:.1}: {:?}",
        "Spanning tree".bright_green().bold(),
        tree.total_weight().into_inner(),
        tree.edges().iter().map(|&(u, v, _)| (u, v)).collect::<Vec<_>>()
    );

    let colors = vertex_coloring(&graph);
    print!("{} ({} colors):", "Coloring".bright_blue().bold(), color_count(&colors));
    for (vertex, color) in &colors {
        print!(" {}", paint(vertex.to_string(), *color));
    }
    println!();

    match eulerian_tour(&graph) {
        Some(tour) => println!("{} {:?}", "Eulerian tour".bright_magenta().bold(), tour),
        None => println!("{} none (odd-degree vertices)", "Eulerian tour".bright_magenta().bold()),
    }

    match hamiltonian_cycle(&graph) {
        Some(cycle) => println!("{} {:?}", "Hamiltonian cycle".bright_cyan().bold(), cycle),
        None => println!("{} heuristic found none", "Hamiltonian cycle".bright_cyan().bold()),
    }

    println!(
        "{} {:?}",
        "Maximum matching".bright_red().bold(),
        maximum_matching(&graph)
    );
}
