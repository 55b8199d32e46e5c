use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns every edge as `(from, to, weight)`, grouped by tail vertex in ascending order
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, usize, W)> + 'a>
    where
        W: 'a,
    {
        Box::new(
            (0..self.vertex_count())
                .flat_map(move |u| self.outgoing_edges(u).map(move |(v, w)| (u, v, w))),
        )
    }

    /// Finds an edge whose reverse is also in the graph, if any.
    ///
    /// Suurballe's algorithm requires an asymmetric graph, so `None` is the
    /// answer callers want.
    fn find_symmetric_edge(&self) -> Option<(usize, usize)> {
        self.edges()
            .find(|&(u, v, _)| self.has_edge(v, u))
            .map(|(u, v, _)| (u, v))
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}

/// Trait for transforming a graph (e.g., splitting every vertex in two)
pub trait GraphTransform<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Transforms a graph into a different representation
    fn transform(&self, graph: &G) -> G;

    /// Maps a vertex from the transformed graph back to the original graph
    fn map_vertex_to_original(&self, transformed_vertex: usize) -> usize;

    /// Maps a vertex from the original graph to the transformed graph
    /// Returns a list of vertices in the transformed graph that correspond to the original vertex
    fn map_vertex_from_original(&self, original_vertex: usize) -> Vec<usize>;
}
