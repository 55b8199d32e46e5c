//! Suurballe and Tarjan's algorithm for least-cost pairs of edge-disjoint paths
//! from one source to every vertex.
//!
//! A run has three phases. Shortest paths from the source give a tree and the
//! reduced edge costs `d(u) - d(v) + c(u, v)`, all non-negative. The tree is then
//! numbered in pre- and postorder and every non-tree edge is listed at both of its
//! endpoints. Finally a Dijkstra-like loop labels vertices in order of tentative
//! reduced distance; labeling `v` removes it from the tree, and every non-tree edge
//! whose endpoints thereby end up in different subtrees is processed once, with
//! `v` as its cause.
//!
//! The finished [`SuurballeTree`] gives, for every target `t`, the cost
//! `2 d(t) + d'(t)` of the best disjoint pair and the pair itself.

mod extract;
mod search;
mod tree;

use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::Graph;
use crate::{Error, Result};

pub use tree::{SuurballeStats, SuurballeTree};

/// A pair of paths from the source to one target, as vertex sequences
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisjointPaths {
    pub first: Vec<usize>,
    pub second: Vec<usize>,
}

impl DisjointPaths {
    /// True when no disjoint pair was found
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    pub fn into_pair(self) -> (Vec<usize>, Vec<usize>) {
        (self.first, self.second)
    }
}

/// Runs Suurballe's algorithm on top of a pluggable shortest path algorithm
#[derive(Debug, Clone)]
pub struct Suurballe<S = Dijkstra> {
    /// Computes the initial shortest-path tree
    shortest_paths: S,
    /// Reject graphs containing both (u, v) and (v, u) before running
    check_asymmetry: bool,
}

impl Suurballe<Dijkstra> {
    /// Create a new instance that uses Dijkstra for the initial tree
    pub fn new() -> Self {
        Suurballe {
            shortest_paths: Dijkstra::new(),
            check_asymmetry: false,
        }
    }
}

impl Default for Suurballe<Dijkstra> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Suurballe<S> {
    /// Use another shortest path algorithm for the initial tree
    pub fn with_shortest_paths<T>(self, shortest_paths: T) -> Suurballe<T> {
        Suurballe {
            shortest_paths,
            check_asymmetry: self.check_asymmetry,
        }
    }

    /// Enable or disable the asymmetry check.
    ///
    /// The algorithm assumes an asymmetric graph and does not look for violations
    /// unless this is enabled; it costs one pass over the edges.
    pub fn with_asymmetry_check(mut self, enabled: bool) -> Self {
        self.check_asymmetry = enabled;
        self
    }

    /// Computes the least-cost edge-disjoint paths from `source` to every vertex
    pub fn compute<W, G>(&self, graph: &G, source: usize) -> Result<SuurballeTree<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        S: ShortestPathAlgorithm<W, G>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if self.check_asymmetry {
            if let Some((u, v)) = graph.find_symmetric_edge() {
                return Err(Error::SymmetricEdge(u, v));
            }
        }

        let shortest_paths = self.shortest_paths.compute_shortest_paths(graph, source)?;
        debug!(
            "{} reached {} of {} vertices from {}",
            <S as ShortestPathAlgorithm<W, G>>::name(&self.shortest_paths),
            shortest_paths.reachable_count(),
            graph.vertex_count(),
            source
        );

        let mut tree = SuurballeTree::build(graph, &shortest_paths)?;
        tree.label_all()?;

        let stats = tree.stats();
        debug!(
            "source {}: labeled {} of {} reachable vertices, processed {} of {} non-tree edges",
            source, stats.labeled, stats.reachable, stats.relaxations, stats.non_tree_edges
        );
        Ok(tree)
    }

    /// Runs one independent computation per source, in parallel
    pub fn compute_many<W, G>(&self, graph: &G, sources: &[usize]) -> Result<Vec<SuurballeTree<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
        G: Graph<W> + Sync,
        S: ShortestPathAlgorithm<W, G> + Sync,
    {
        sources
            .par_iter()
            .map(|&source| self.compute(graph, source))
            .collect()
    }
}

/// Computes the least-cost edge-disjoint paths from `source` to every vertex of an
/// asymmetric graph, using Dijkstra for the initial tree.
pub fn compute<W, G>(graph: &G, source: usize) -> Result<SuurballeTree<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Suurballe::new().compute(graph, source)
}

/// [`compute`] for several sources in parallel, one tree per source
pub fn compute_many<W, G>(graph: &G, sources: &[usize]) -> Result<Vec<SuurballeTree<W>>>
where
    W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    G: Graph<W> + Sync,
{
    Suurballe::new().compute_many(graph, sources)
}

/// Parent of every vertex in the shortest-path tree; `None` for the source and for
/// unreachable vertices
pub fn parents_in_shortest_path_tree<W>(shortest_paths: &ShortestPathResult<W>) -> Vec<Option<usize>>
where
    W: Float + Zero + Debug + Copy,
{
    shortest_paths
        .predecessors
        .iter()
        .enumerate()
        .map(|(v, parent)| {
            if v == shortest_paths.source || !shortest_paths.is_reachable(v) {
                None
            } else {
                *parent
            }
        })
        .collect()
}

/// Cost of the edge (u, v) relative to the shortest-path distances of its ends
pub fn reduced_cost<W>(original_cost: W, distance_to_u: W, distance_to_v: W) -> W
where
    W: Float + Zero + Debug + Copy,
{
    distance_to_u - distance_to_v + original_cost
}
