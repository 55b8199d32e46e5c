use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use serde::Serialize;
use suurballe::algorithm::suurballe::{Suurballe, SuurballeStats};
use suurballe::graph::generators::generate_random_asymmetric;
use suurballe::graph::{DirectedGraph, Graph};

/// One row of the JSON report
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    single_source_ms: f64,
    sources: usize,
    parallel_ms: f64,
    with_disjoint_pair: usize,
    stats: SuurballeStats,
}

fn time_single_source(
    algorithm: &Suurballe,
    graph: &DirectedGraph<OrderedFloat<f64>>,
    source: usize,
) -> Result<(Duration, usize, SuurballeStats), suurballe::Error> {
    let start = Instant::now();
    let tree = algorithm.compute(graph, source)?;
    let duration = start.elapsed();

    let with_pair = (0..graph.vertex_count())
        .filter(|&v| v != source && tree.disjoint_path_cost(v).is_some())
        .count();

    Ok((duration, with_pair, tree.stats()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 5_000, 20_000, 50_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 3.0;
    let parallel_sources = 16;

    let algorithm = Suurballe::new();
    let mut rows = Vec::new();

    for &size in &graph_sizes {
        log::info!("Generating random asymmetric graph with {} vertices", size);
        let graph = generate_random_asymmetric(size, edge_factor, 100, size as u64);

        let (single, with_pair, stats) = time_single_source(&algorithm, &graph, 0)?;
        log::info!(
            "{} vertices: {:?} for one source, {} targets with a disjoint pair",
            size, single, with_pair
        );

        let sources: Vec<usize> = (0..parallel_sources.min(size)).collect();
        let start = Instant::now();
        let trees = algorithm.compute_many(&graph, &sources)?;
        let parallel = start.elapsed();
        log::info!("{} sources in parallel: {:?}", trees.len(), parallel);

        rows.push(BenchmarkRow {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            single_source_ms: single.as_secs_f64() * 1000.0,
            sources: trees.len(),
            parallel_ms: parallel.as_secs_f64() * 1000.0,
            with_disjoint_pair: with_pair,
            stats,
        });
    }

    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
