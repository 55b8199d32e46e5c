//! Suurballe - least-cost edge-disjoint paths from a single source
//!
//! This library implements the algorithm described in "A Quick Method for Finding
//! Shortest Pairs of Disjoint Paths" by Suurballe and Tarjan (1984), generalized to
//! compute a pair of edge-disjoint paths from one source to every other vertex of a
//! directed graph in a single run.
//!
//! The input graph must be asymmetric: if (u, v) is an edge then (v, u) is not.
//! [`graph::vertex_split::VertexSplit`] turns an undirected graph into such a digraph,
//! in which edge-disjoint paths correspond to vertex-disjoint paths of the original.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    suurballe::{compute, compute_many, DisjointPaths, Suurballe, SuurballeTree},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Graph is not asymmetric: both ({0}, {1}) and ({1}, {0}) are edges")]
    SymmetricEdge(usize, usize),

    /// An edge was relaxed through a vertex that was never reached.
    #[error("Relaxation triggered by vertex {trigger} whose tentative distance is infinite")]
    UnreachableRelaxation { trigger: usize },

    /// A predecessor or tree parent was missing before the walk reached the source.
    #[error("Malformed tree: reconstruction towards {target} stopped at vertex {vertex}")]
    MalformedReconstruction { vertex: usize, target: usize },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
