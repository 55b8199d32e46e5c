use ordered_float::OrderedFloat;
use std::collections::HashSet;
use suurballe::algorithm::suurballe::compute;
use suurballe::graph::generators::{generate_grid_undirected, generate_random_undirected};
use suurballe::graph::{DirectedGraph, Graph, GraphTransform, MutableGraph, VertexSplit};

type Weight = OrderedFloat<f64>;

fn undirected_weight(graph: &DirectedGraph<Weight>, u: usize, v: usize) -> f64 {
    graph
        .get_edge_weight(u, v)
        .or_else(|| graph.get_edge_weight(v, u))
        .unwrap_or_else(|| panic!("{{{}, {}}} is not an edge", u, v))
        .0
}

#[test]
fn test_split_layout() {
    let mut graph: DirectedGraph<Weight> = DirectedGraph::with_capacity(3);
    graph.add_edge(0, 1, OrderedFloat(2.0));
    graph.add_edge(1, 2, OrderedFloat(5.0));
    graph.add_edge(2, 2, OrderedFloat(1.0));

    let split = VertexSplit::for_graph(&graph);
    assert_eq!(split.original_vertex_count(), 3);
    assert_eq!(split.entry(1), 1);
    assert_eq!(split.exit(1), 4);
    assert!(split.is_entry(2));
    assert!(!split.is_entry(5));
    assert_eq!(<VertexSplit as GraphTransform<Weight, DirectedGraph<Weight>>>::map_vertex_to_original(&split, 5), 2);
    assert_eq!(<VertexSplit as GraphTransform<Weight, DirectedGraph<Weight>>>::map_vertex_from_original(&split, 0), vec![0, 3]);

    let transformed = split.transform(&graph);
    assert_eq!(transformed.vertex_count(), 6);
    // three internal edges, two per undirected edge, no loop
    assert_eq!(transformed.edge_count(), 7);
    assert_eq!(transformed.get_edge_weight(0, 3), Some(OrderedFloat(0.0)));
    assert_eq!(transformed.get_edge_weight(3, 1), Some(OrderedFloat(2.0)));
    assert_eq!(transformed.get_edge_weight(4, 0), Some(OrderedFloat(2.0)));
    assert_eq!(transformed.get_edge_weight(5, 1), Some(OrderedFloat(5.0)));
    assert!(!transformed.has_edge(5, 2));
    assert!(transformed.find_symmetric_edge().is_none());
}

#[test]
fn test_original_path_collapses_internal_edges() {
    let split = VertexSplit::new(4);
    assert_eq!(split.original_path(&[4, 1, 5, 3]), vec![0, 1, 3]);
    assert_eq!(split.original_path(&[]), Vec::<usize>::new());
}

#[test]
fn test_grid_corners() {
    let grid = generate_grid_undirected(3, 3);
    let split = VertexSplit::for_graph(&grid);
    let tree = compute(&split.transform(&grid), split.exit(0)).unwrap();

    let costs = split.vertex_disjoint_costs(&tree);
    // around the grid in both directions
    assert_eq!(costs.get(&8), Some(&OrderedFloat(8.0)));
    // the direct edge plus the way round through 3 and 4
    assert_eq!(costs.get(&1), Some(&OrderedFloat(4.0)));

    let paths = split.vertex_disjoint_paths(&tree).unwrap();
    let corner = &paths[&8];
    assert_eq!(corner.first.len(), 5);
    assert_eq!(corner.second.len(), 5);
    let first: HashSet<_> = corner.first[1..4].iter().collect();
    assert!(corner.second[1..4].iter().all(|v| !first.contains(v)));
}

#[test]
fn test_path_has_no_vertex_disjoint_pair() {
    let line = DirectedGraph::from_edges(
        3,
        [(0, 1, 1.0), (1, 2, 1.0)].into_iter().map(|(u, v, w)| (u, v, OrderedFloat(w))),
    );
    let split = VertexSplit::for_graph(&line);
    let tree = compute(&split.transform(&line), split.exit(0)).unwrap();

    let costs = split.vertex_disjoint_costs(&tree);
    assert!(costs.get(&1).is_none());
    assert!(costs.get(&2).is_none());
    assert!(split.vertex_disjoint_paths(&tree).unwrap().get(&2).is_none());
}

#[test]
fn test_random_pairs_are_vertex_disjoint() {
    for seed in 0..8 {
        let graph = generate_random_undirected(25, 30, 9, seed);
        let split = VertexSplit::for_graph(&graph);
        let transformed = split.transform(&graph);
        assert!(transformed.find_symmetric_edge().is_none());

        let root = 0;
        let tree = compute(&transformed, split.exit(root)).unwrap();
        let paths = split.vertex_disjoint_paths(&tree).unwrap();
        let costs = split.vertex_disjoint_costs(&tree);
        assert_eq!(paths.len(), costs.len());

        for (&target, pair) in paths.iter().filter(|&(&v, _)| v != root) {
            for path in [&pair.first, &pair.second] {
                assert_eq!(path.first(), Some(&root));
                assert_eq!(path.last(), Some(&target));
            }

            let inner_first: HashSet<usize> = pair.first[1..pair.first.len() - 1].iter().copied().collect();
            let inner_second: HashSet<usize> = pair.second[1..pair.second.len() - 1].iter().copied().collect();
            assert_eq!(inner_first.len(), pair.first.len() - 2, "first path to {} repeats a vertex", target);
            assert!(inner_first.is_disjoint(&inner_second), "paths to {} share a vertex", target);

            let total: f64 = pair
                .first
                .windows(2)
                .chain(pair.second.windows(2))
                .map(|step| undirected_weight(&graph, step[0], step[1]))
                .sum();
            assert_eq!(OrderedFloat(total), costs[&target], "cost to {}", target);
        }
    }
}
