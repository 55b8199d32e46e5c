use ordered_float::OrderedFloat;
use suurballe::algorithm::dijkstra::Dijkstra;
use suurballe::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use suurballe::graph::DirectedGraph;
use suurballe::graph::{Graph, MutableGraph};
use suurballe::{compute, Error};

type Weight = OrderedFloat<f64>;

// A graph given as a plain edge list, without the weight checks of DirectedGraph
#[derive(Debug)]
struct EdgeList {
    vertices: usize,
    edges: Vec<(usize, usize, Weight)>,
}

impl Graph<Weight> for EdgeList {
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, Weight)> + '_> {
        Box::new(
            self.edges
                .iter()
                .filter(move |&&(u, _, _)| u == vertex)
                .map(|&(_, v, w)| (v, w)),
        )
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, Weight)> + '_> {
        Box::new(
            self.edges
                .iter()
                .filter(move |&&(_, v, _)| v == vertex)
                .map(|&(u, _, w)| (u, w)),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertices
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.edges
            .iter()
            .find(|&&(u, v, _)| u == from && v == to)
            .map(|&(_, _, w)| w)
    }
}

// Test helper function to create a grid where every step goes right or down
fn create_monotone_grid(width: usize, height: usize) -> DirectedGraph<Weight> {
    let mut graph = DirectedGraph::new();

    // Add vertices for all positions in the grid
    for _ in 0..(width * height) {
        graph.add_vertex();
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, OrderedFloat(1.0));
            }
            // diagonal shortcut, slightly cheaper than two steps
            if x + 1 < width && y + 1 < height {
                graph.add_edge(vertex, vertex + width + 1, OrderedFloat(1.5));
            }
        }
    }

    graph
}

fn dijkstra_path(result: &ShortestPathResult<Weight>, target: usize) -> Option<Vec<usize>> {
    <Dijkstra as ShortestPathAlgorithm<Weight, DirectedGraph<Weight>>>::get_path(&Dijkstra::new(), result, target)
}

#[test]
fn test_distances_on_monotone_grid() {
    let graph = create_monotone_grid(10, 10);
    assert!(graph.find_symmetric_edge().is_none());

    let result: ShortestPathResult<Weight> = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    // nine diagonal steps
    assert_eq!(result.distances[99], Some(OrderedFloat(13.5)));
    assert_eq!(result.distances[9], Some(OrderedFloat(9.0)));
    assert_eq!(result.reachable_count(), 100);

    let path = dijkstra_path(&result, 99).unwrap();
    assert_eq!(path[0], 0, "Path should start at source");
    assert_eq!(path[path.len() - 1], 99, "Path should end at target");
    for i in 1..path.len() {
        assert!(graph.has_edge(path[i - 1], path[i]), "Path should only use existing edges");
    }
}

#[test]
fn test_unreachable_vertices() {
    let graph = create_monotone_grid(5, 5);
    let result: ShortestPathResult<Weight> = Dijkstra::new().compute_shortest_paths(&graph, 12).unwrap();

    // nothing leads back up or left
    assert!(!result.is_reachable(0));
    assert!(!result.is_reachable(11));
    assert!(result.is_reachable(24));
    assert_eq!(dijkstra_path(&result, 0), None);
    assert_eq!(dijkstra_path(&result, 12), Some(vec![12]));
}

#[test]
fn test_removed_edges_are_routed_around() {
    let mut graph = create_monotone_grid(4, 4);
    // cut every edge out of vertex 5
    for to in [6, 9, 10] {
        assert!(graph.remove_edge(5, to));
    }

    let result: ShortestPathResult<Weight> = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let path = dijkstra_path(&result, 15).unwrap();
    assert!(!path.contains(&5));
    assert_eq!(result.distances[15], Some(OrderedFloat(5.0)));
}

#[test]
fn test_missing_source() {
    let graph = create_monotone_grid(3, 3);
    let result: Result<ShortestPathResult<Weight>, Error> = Dijkstra::new().compute_shortest_paths(&graph, 9);
    assert_eq!(result.unwrap_err(), Error::SourceNotFound);
}

#[test]
fn test_invalid_edges_are_rejected() {
    let mut graph: DirectedGraph<Weight> = DirectedGraph::with_capacity(2);
    assert!(!graph.add_edge(0, 1, OrderedFloat(-1.0)));
    assert!(!graph.add_edge(0, 2, OrderedFloat(1.0)));
    assert!(graph.add_edge(0, 1, OrderedFloat(1.0)));
    assert!(graph.validate_non_negative());

    // adding again replaces the weight
    assert!(graph.add_edge(0, 1, OrderedFloat(4.0)));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(0, 1), Some(OrderedFloat(4.0)));
}

#[test]
fn test_edges_grouped_by_tail() {
    let graph = DirectedGraph::from_edges(
        4,
        [(2, 3, 1.0), (0, 2, 2.0), (3, 0, 4.0), (0, 1, 3.0)]
            .into_iter()
            .map(|(u, v, w)| (u, v, OrderedFloat(w))),
    );
    let edges: Vec<(usize, usize, Weight)> = graph.edges().collect();
    assert_eq!(
        edges,
        vec![
            (0, 2, OrderedFloat(2.0)),
            (0, 1, OrderedFloat(3.0)),
            (2, 3, OrderedFloat(1.0)),
            (3, 0, OrderedFloat(4.0)),
        ]
    );
    assert!(graph.find_symmetric_edge().is_none());
}

#[test]
fn test_negative_weight_is_rejected() {
    let graph = EdgeList {
        vertices: 3,
        edges: vec![(0, 1, OrderedFloat(1.0)), (2, 1, OrderedFloat(-2.0))],
    };
    // vertex 2 is unreachable, the weight is rejected anyway
    let result: Result<ShortestPathResult<Weight>, Error> = Dijkstra::new().compute_shortest_paths(&graph, 0);
    assert!(matches!(result, Err(Error::AlgorithmError(_))));
    assert!(compute(&graph, 0).is_err());
}

#[test]
fn test_zero_weight_cycle_keeps_source_as_root() {
    let graph = EdgeList {
        vertices: 3,
        edges: vec![
            (0, 1, OrderedFloat(0.0)),
            (1, 2, OrderedFloat(0.0)),
            (2, 0, OrderedFloat(0.0)),
        ],
    };
    let result: ShortestPathResult<Weight> = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(OrderedFloat(0.0)); 3]);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1)]);
}

#[test]
fn test_improved_vertex_is_settled_once() {
    // 3 is first reached at 10, then at 3 through 1 and 2
    let graph = EdgeList {
        vertices: 4,
        edges: vec![
            (0, 3, OrderedFloat(10.0)),
            (0, 1, OrderedFloat(1.0)),
            (1, 2, OrderedFloat(1.0)),
            (2, 3, OrderedFloat(1.0)),
        ],
    };
    let result: ShortestPathResult<Weight> = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[3], Some(OrderedFloat(3.0)));
    assert_eq!(result.predecessors[3], Some(2));
    let path = <Dijkstra as ShortestPathAlgorithm<Weight, EdgeList>>::get_path(&Dijkstra::new(), &result, 3);
    assert_eq!(path, Some(vec![0, 1, 2, 3]));
}
