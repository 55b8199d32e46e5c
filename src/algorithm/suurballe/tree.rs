use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::data_structures::{BinaryHeapWrapper, Edge, IncidenceLists, TreeNumbering};
use crate::graph::Graph;
use crate::{Error, Result};

use super::{parents_in_shortest_path_tree, reduced_cost};

/// Counters collected while building and labeling a [`SuurballeTree`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuurballeStats {
    /// Vertices reachable from the source
    pub reachable: usize,
    /// Edges of the reachable subgraph that are not in the shortest-path tree
    pub non_tree_edges: usize,
    /// Vertices permanently labeled
    pub labeled: usize,
    /// Non-tree edges processed
    pub relaxations: usize,
    /// Relaxations that lowered a tentative distance
    pub improvements: usize,
    /// Superseded queue entries discarded on pop; seeds of vertices never
    /// reached are not counted
    pub stale_entries: usize,
    /// Vertices visited by subtree scans
    pub scanned_vertices: usize,
}

/// The tree and every per-vertex label of Suurballe's algorithm for one source.
///
/// Vertices are indices into per-vertex arrays; a missing parent, predecessor or
/// process cause is `None`. After [`super::Suurballe::compute`] returns, the tree is
/// read-only and answers cost and path queries for every target.
#[derive(Debug, Clone)]
pub struct SuurballeTree<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    pub(super) source: usize,
    /// Shortest-path distance from the source, `None` if unreachable
    pub(super) distance_from_source: Vec<Option<W>>,
    /// Best reduced distance found so far; frozen once the vertex is labeled
    pub(super) tentative_distance: Vec<W>,
    /// Tail of the non-tree edge that set `tentative_distance`
    pub(super) tentative_predecessor: Vec<Option<usize>>,
    /// The vertex whose labeling caused that edge to be processed
    pub(super) process_cause: Vec<Option<usize>>,
    pub(super) labeled: Vec<bool>,
    /// Current forest; edges are only ever removed
    pub(super) parent: Vec<Option<usize>>,
    pub(super) children: Vec<Vec<usize>>,
    /// Parent in the original shortest-path tree, never modified
    pub(super) tree_parent: Vec<Option<usize>>,
    pub(super) transformed_cost: HashMap<Edge, W>,
    pub(super) incident: IncidenceLists,
    /// Numbering of the original tree; see [`TreeNumbering`]
    pub(super) numbering: TreeNumbering,
    pub(super) queue: BinaryHeapWrapper<usize, W>,
    pub(super) stats: SuurballeStats,
}

impl<W> SuurballeTree<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Builds the working structure from the shortest paths out of the source:
    /// reduced costs, the frozen tree numbering, incident non-tree edges and the
    /// seeded queue.
    pub(super) fn build<G>(graph: &G, shortest_paths: &ShortestPathResult<W>) -> Result<Self>
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let source = shortest_paths.source;
        if shortest_paths.distances.len() != n || shortest_paths.predecessors.len() != n {
            return Err(Error::AlgorithmError(format!(
                "shortest path result covers {} vertices, graph has {}",
                shortest_paths.distances.len(),
                n
            )));
        }
        if shortest_paths.distances.get(source).copied().flatten() != Some(W::zero()) {
            return Err(Error::AlgorithmError(format!(
                "shortest path result gives source {} a non-zero distance",
                source
            )));
        }

        let distance_from_source = shortest_paths.distances.clone();
        let tree_parent = parents_in_shortest_path_tree(shortest_paths);
        let numbering = TreeNumbering::from_parents(source, &tree_parent);

        let mut children = vec![Vec::new(); n];
        for (v, parent) in tree_parent.iter().enumerate() {
            if let Some(p) = *parent {
                children[p].push(v);
            }
        }

        let mut tentative_distance = vec![W::infinity(); n];
        tentative_distance[source] = W::zero();

        let mut queue = BinaryHeapWrapper::with_capacity(n);
        let mut stats = SuurballeStats::default();
        for v in (0..n).filter(|&v| distance_from_source[v].is_some()) {
            queue.push(v, tentative_distance[v]);
            stats.reachable += 1;
        }

        let mut transformed_cost = HashMap::new();
        let mut incident = IncidenceLists::new(n);
        for (u, v, weight) in graph.edges() {
            let (Some(dist_u), Some(dist_v)) = (distance_from_source[u], distance_from_source[v])
            else {
                continue;
            };
            // rounding in the shortest path distances can leave a tiny negative
            let cost = std::cmp::max(reduced_cost(weight, dist_u, dist_v), W::zero());
            transformed_cost.insert((u, v), cost);

            if tree_parent[v] != Some(u) {
                incident.insert((u, v), &numbering);
                stats.non_tree_edges += 1;
            }
        }

        Ok(SuurballeTree {
            source,
            distance_from_source,
            tentative_distance,
            tentative_predecessor: vec![None; n],
            process_cause: vec![None; n],
            labeled: vec![false; n],
            parent: tree_parent.clone(),
            children,
            tree_parent,
            transformed_cost,
            incident,
            numbering,
            queue,
            stats,
        })
    }

    /// The vertex every path starts from
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.labeled.len()
    }

    /// Shortest-path distance from the source, `None` if `vertex` is unreachable
    pub fn distance_from_source(&self, vertex: usize) -> Option<W> {
        self.distance_from_source.get(vertex).copied().flatten()
    }

    /// Reduced distance of the best disjoint pair found; infinite if there is none
    pub fn tentative_distance(&self, vertex: usize) -> W {
        self.tentative_distance
            .get(vertex)
            .copied()
            .unwrap_or_else(W::infinity)
    }

    pub fn tentative_predecessor(&self, vertex: usize) -> Option<usize> {
        self.tentative_predecessor.get(vertex).copied().flatten()
    }

    pub fn process_cause(&self, vertex: usize) -> Option<usize> {
        self.process_cause.get(vertex).copied().flatten()
    }

    pub fn is_labeled(&self, vertex: usize) -> bool {
        self.labeled.get(vertex).copied().unwrap_or(false)
    }

    /// Labels of all vertices, indexed by vertex
    pub fn labeled(&self) -> &[bool] {
        &self.labeled
    }

    /// Parent in the current forest
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Children in the current forest
    pub fn children(&self, vertex: usize) -> &[usize] {
        self.children.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parent in the shortest-path tree the run started from
    pub fn tree_parent(&self, vertex: usize) -> Option<usize> {
        self.tree_parent.get(vertex).copied().flatten()
    }

    /// Non-tree edges still waiting to be processed at `vertex`
    pub fn incident_edges(&self, vertex: usize) -> &[Edge] {
        self.incident.edges(vertex)
    }

    /// Reduced cost of the edge `(from, to)` if both ends are reachable
    pub fn transformed_cost(&self, from: usize, to: usize) -> Option<W> {
        self.transformed_cost.get(&(from, to)).copied()
    }

    pub fn numbering(&self) -> &TreeNumbering {
        &self.numbering
    }

    /// True iff `ancestor` is an ancestor of `descendant` (or the same vertex)
    /// in the original shortest-path tree
    pub fn is_ancestor(&self, ancestor: usize, descendant: usize) -> bool {
        self.numbering.is_ancestor(ancestor, descendant)
    }

    pub fn stats(&self) -> SuurballeStats {
        self.stats
    }
}
