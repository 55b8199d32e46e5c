use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::suurballe::{DisjointPaths, SuurballeTree};
use crate::graph::{DirectedGraph, Graph, GraphTransform, MutableGraph};
use crate::Result;

/// Splits every vertex of an undirected graph into an entry and an exit copy.
///
/// The undirected graph is given as a [`DirectedGraph`] storing each edge once, in
/// either direction. In the split digraph, vertex `v` becomes `entry(v) = v` and
/// `exit(v) = v + n`, joined by a zero-weight edge `entry(v) -> exit(v)`, and each
/// undirected edge `{u, v}` becomes `exit(u) -> entry(v)` and `exit(v) -> entry(u)`.
///
/// The result is asymmetric, and since every path crosses a vertex through its one
/// internal edge, edge-disjoint paths from `exit(root)` to `entry(v)` are
/// vertex-disjoint paths from `root` to `v` in the original graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexSplit {
    /// Number of vertices in the undirected graph
    original_vertex_count: usize,
}

impl VertexSplit {
    /// Creates a split for an undirected graph with `original_vertex_count` vertices
    pub fn new(original_vertex_count: usize) -> Self {
        VertexSplit { original_vertex_count }
    }

    /// Creates a split sized for `graph`
    pub fn for_graph<W, G>(graph: &G) -> Self
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        Self::new(graph.vertex_count())
    }

    pub fn original_vertex_count(&self) -> usize {
        self.original_vertex_count
    }

    /// The copy of `vertex` that receives edges
    pub fn entry(&self, vertex: usize) -> usize {
        vertex
    }

    /// The copy of `vertex` that emits edges; use `exit(root)` as the source
    pub fn exit(&self, vertex: usize) -> usize {
        vertex + self.original_vertex_count
    }

    pub fn is_entry(&self, split_vertex: usize) -> bool {
        split_vertex < self.original_vertex_count
    }

    /// Maps a path of split vertices to original vertices, collapsing the
    /// repeated vertex produced by each internal edge.
    pub fn original_path(&self, split_path: &[usize]) -> Vec<usize> {
        let mut path: Vec<usize> = Vec::with_capacity(split_path.len() / 2 + 1);
        for &split_vertex in split_path {
            let vertex = self.map_original(split_vertex);
            if path.last() != Some(&vertex) {
                path.push(vertex);
            }
        }
        path
    }

    /// For every original vertex whose entry copy has a disjoint pair in `tree`,
    /// the pair of vertex-disjoint paths from the root, in original vertices.
    pub fn vertex_disjoint_paths<W>(
        &self,
        tree: &SuurballeTree<W>,
    ) -> Result<HashMap<usize, DisjointPaths>>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        let mut paths = HashMap::new();
        for split_vertex in self.labeled_entries(tree) {
            let split_paths = tree.extract_paths(tree.source(), split_vertex)?;
            paths.insert(
                self.map_original(split_vertex),
                DisjointPaths {
                    first: self.original_path(&split_paths.first),
                    second: self.original_path(&split_paths.second),
                },
            );
        }
        Ok(paths)
    }

    /// Cost of the least-cost pair of vertex-disjoint paths from the root to every
    /// original vertex that has one.
    pub fn vertex_disjoint_costs<W>(&self, tree: &SuurballeTree<W>) -> HashMap<usize, W>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        self.labeled_entries(tree)
            .filter_map(|split_vertex| {
                tree.disjoint_path_cost(split_vertex)
                    .map(|cost| (self.map_original(split_vertex), cost))
            })
            .collect()
    }

    fn labeled_entries<'a, W>(
        &self,
        tree: &'a SuurballeTree<W>,
    ) -> impl Iterator<Item = usize> + 'a
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        (0..self.original_vertex_count.min(tree.vertex_count()))
            .filter(move |&v| tree.is_labeled(v))
    }

    fn map_original(&self, split_vertex: usize) -> usize {
        if self.original_vertex_count == 0 {
            return split_vertex;
        }
        split_vertex % self.original_vertex_count
    }
}

impl<W> GraphTransform<W, DirectedGraph<W>> for VertexSplit
where
    W: Float + Zero + Debug + Copy,
{
    fn transform(&self, graph: &DirectedGraph<W>) -> DirectedGraph<W> {
        let n = self.original_vertex_count;
        let mut split = DirectedGraph::with_capacity(2 * n);

        for v in 0..n {
            split.add_edge(self.entry(v), self.exit(v), W::zero());
        }

        for (u, v, weight) in graph.edges() {
            // a loop would pair exit(u) -> entry(u) with the internal edge
            if u == v || u >= n || v >= n {
                continue;
            }
            split.add_edge(self.exit(u), self.entry(v), weight);
            split.add_edge(self.exit(v), self.entry(u), weight);
        }

        split
    }

    fn map_vertex_to_original(&self, transformed_vertex: usize) -> usize {
        self.map_original(transformed_vertex)
    }

    fn map_vertex_from_original(&self, original_vertex: usize) -> Vec<usize> {
        vec![self.entry(original_vertex), self.exit(original_vertex)]
    }
}
