use std::fmt::Debug;
use log::trace;
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm, the default source of the shortest-path tree.
///
/// Every vertex is settled once. The predecessor of a settled vertex is the tail
/// of the edge that last lowered its distance, so `predecessors` is already the
/// parent array of the tree: the source and unreachable vertices have none.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

/// First edge with a negative weight, in tail order
fn negative_edge<W, G>(graph: &G) -> Option<(usize, usize)>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph
        .edges()
        .find(|&(_, _, weight)| weight < W::zero())
        .map(|(u, v, _)| (u, v))
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        // reduced costs are only non-negative if every weight is
        if let Some((u, v)) = negative_edge(graph) {
            return Err(Error::AlgorithmError(format!("negative weight on edge ({}, {})", u, v)));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = Some(W::zero());
        let mut queue = BinaryHeapWrapper::with_capacity(n);
        queue.push(source, W::zero());

        loop {
            let next = queue.pop_live(|v, key| !settled[v] && distances[v] == Some(key));
            let Some((u, dist_u)) = next else {
                break;
            };
            settled[u] = true;
            trace!("settled {} at distance {:?}", u, dist_u);

            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let candidate = dist_u + weight;
                if distances[v].map_or(true, |current| candidate < current) {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
