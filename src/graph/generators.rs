use crate::graph::{DirectedGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random asymmetric digraph with roughly `edge_factor * n` edges.
///
/// An edge (u, v) is only added when neither (u, v) nor (v, u) is present, so the
/// result can be fed to Suurballe's algorithm directly. Weights are whole numbers
/// in `1..=max_weight` so that sums of path costs stay exact.
pub fn generate_random_asymmetric(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let target_edges = ((edge_factor * n as f64) as usize).min(n * (n - 1) / 2);
    let mut added = 0;
    let mut attempts = 0;

    while added < target_edges && attempts < 20 * target_edges + 100 {
        attempts += 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || graph.has_edge(u, v) || graph.has_edge(v, u) {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1..=max_weight.max(1)) as f64);
        graph.add_edge(u, v, weight);
        added += 1;
    }

    graph
}

/// Generates a random undirected graph, each edge stored once with `u < v`.
///
/// Vertex `i` is linked to vertex `i + 1` so the graph is connected; the remaining
/// edges are drawn at random. Suitable as input for the vertex split transform.
pub fn generate_random_undirected(
    n: usize,
    extra_edges: usize,
    max_weight: u32,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);

    for i in 1..n {
        let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
        graph.add_edge(i - 1, i, weight);
    }

    let mut added = 0;
    let mut attempts = 0;
    while added < extra_edges && n > 2 && attempts < 20 * extra_edges + 100 {
        attempts += 1;
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let (u, v) = (a.min(b), a.max(b));
        if u == v || graph.has_edge(u, v) {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
        graph.add_edge(u, v, weight);
        added += 1;
    }

    graph
}

/// Generates an undirected `width x height` grid with unit weights,
/// each edge stored once from the lower to the higher vertex index.
pub fn generate_grid_undirected(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x + 1 < width {
                graph.add_edge(current, get_index(x + 1, y), OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, get_index(x, y + 1), OrderedFloat(1.0));
            }
        }
    }

    graph
}
