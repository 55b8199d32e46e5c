use std::collections::VecDeque;
use std::fmt::Debug;
use log::trace;
use num_traits::{Float, Zero};

use crate::data_structures::incidence::other_endpoint;
use crate::data_structures::Edge;
use crate::{Error, Result};

use super::SuurballeTree;

/// Which edges a subtree scan treats as wasted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    /// The subtree was just cut off below the labeled vertex. Edges whose far end
    /// is still inside it are wasted; the scan stops at the first one from either
    /// end of an incident list.
    Detached,
    /// The subtree is what remains under the labeled vertex's parent. Only edges
    /// reaching into the labeled vertex's original subtree are processed, so the
    /// whole list is examined.
    Parent,
}

impl<W> SuurballeTree<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Labels every vertex reachable from the source, smallest tentative distance
    /// first, cutting the tree apart around each labeled vertex.
    pub(super) fn label_all(&mut self) -> Result<()> {
        loop {
            let (labeled, tentative_distance, stats) =
                (&self.labeled, &self.tentative_distance, &mut self.stats);
            let next = self.queue.pop_live(|v, key| {
                // seeds of vertices no edge ever reached
                if key.is_infinite() {
                    return false;
                }
                let live = !labeled[v] && key <= tentative_distance[v];
                if !live {
                    stats.stale_entries += 1;
                }
                live
            });
            let Some((v, _)) = next else {
                return Ok(());
            };
            self.label(v)?;
        }
    }

    fn label(&mut self, v: usize) -> Result<()> {
        self.labeled[v] = true;
        self.stats.labeled += 1;
        trace!("labeled {} at reduced distance {:?}", v, self.tentative_distance[v]);

        // every edge at v now joins two different subtrees
        let incident: Vec<Edge> = self.incident.edges(v).to_vec();
        for edge in incident {
            self.relax(edge, v)?;
        }

        if let Some(parent) = self.parent[v].take() {
            self.children[parent].retain(|&child| child != v);
            if !self.labeled[parent] {
                self.traverse_subtree(parent, v, ScanMode::Parent)?;
            }
        }

        for child in std::mem::take(&mut self.children[v]) {
            self.parent[child] = None;
            if !self.labeled[child] {
                self.traverse_subtree(child, v, ScanMode::Detached)?;
            }
        }

        Ok(())
    }

    /// Processes the non-tree edge `(u, w)` because labeling `trigger` split its
    /// endpoints into different subtrees. Returns false if the edge had already
    /// been processed. On error the edge stays listed.
    fn relax(&mut self, edge: Edge, trigger: usize) -> Result<bool> {
        if !self.incident.contains(edge) {
            return Ok(false);
        }

        let through = self.tentative_distance[trigger];
        if through.is_infinite() {
            return Err(Error::UnreachableRelaxation { trigger });
        }
        let (u, w) = edge;
        let cost = self
            .transformed_cost(u, w)
            .ok_or_else(|| Error::AlgorithmError(format!("no reduced cost for edge ({}, {})", u, w)))?;

        self.incident.remove(edge);
        self.stats.relaxations += 1;
        let candidate = through + cost;

        if !self.labeled[w] && candidate < self.tentative_distance[w] {
            trace!("d[{}] {:?} -> {:?} via ({}, {}), caused by {}", w, self.tentative_distance[w], candidate, u, w, trigger);
            self.tentative_distance[w] = candidate;
            self.tentative_predecessor[w] = Some(u);
            self.process_cause[w] = Some(trigger);
            self.queue.push(w, candidate);
            self.stats.improvements += 1;
        }

        Ok(true)
    }

    /// Breadth-first visit of the current subtree under `root`, scanning the
    /// incident edges of each vertex on behalf of the labeled vertex `trigger`.
    fn traverse_subtree(&mut self, root: usize, trigger: usize, mode: ScanMode) -> Result<()> {
        let mut queue = VecDeque::from([root]);
        while let Some(x) = queue.pop_front() {
            queue.extend(self.children[x].iter().copied());
            self.stats.scanned_vertices += 1;
            match mode {
                ScanMode::Detached => self.scan(x, root, trigger)?,
                ScanMode::Parent => self.scan_parent(x, trigger)?,
            }
        }
        Ok(())
    }

    /// Scans the list of `x`, a vertex of the subtree rooted at `root`, from the
    /// front and then from the back. Each direction stops at the first edge whose
    /// far end lies in the original subtree of `root`.
    fn scan(&mut self, x: usize, root: usize, trigger: usize) -> Result<()> {
        let mut front = 0;
        while let Some(&edge) = self.incident.edges(x).get(front) {
            if self.is_ancestor(root, other_endpoint(edge, x)) {
                break;
            }
            if !self.relax(edge, trigger)? {
                front += 1;
            }
        }

        let mut back = self.incident.len(x);
        while back > front + 1 {
            let edge = self.incident.edges(x)[back - 1];
            if self.is_ancestor(root, other_endpoint(edge, x)) {
                break;
            }
            self.relax(edge, trigger)?;
            back -= 1;
        }

        Ok(())
    }

    /// Processes the edges of `x` whose far end lies in the original subtree of
    /// `trigger`.
    fn scan_parent(&mut self, x: usize, trigger: usize) -> Result<()> {
        let incident: Vec<Edge> = self.incident.edges(x).to_vec();
        for edge in incident {
            if self.is_ancestor(trigger, other_endpoint(edge, x)) {
                self.relax(edge, trigger)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ordered_float::OrderedFloat;

    use super::*;
    use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
    use crate::graph::DirectedGraph;
    use crate::Dijkstra;

    type Weight = OrderedFloat<f64>;

    // 0 -> 1 -> 3 is the tree path to 3; (2, 3) is the only non-tree edge
    fn diamond_tree() -> SuurballeTree<Weight> {
        let graph = DirectedGraph::from_edges(
            4,
            [(0, 1, 1.0), (0, 2, 2.0), (1, 3, 1.0), (2, 3, 1.0)]
                .into_iter()
                .map(|(u, v, w)| (u, v, OrderedFloat(w))),
        );
        let shortest_paths: ShortestPathResult<Weight> =
            Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        SuurballeTree::build(&graph, &shortest_paths).unwrap()
    }

    #[test]
    fn test_relax_through_unreached_trigger_fails() {
        let mut tree = diamond_tree();
        assert!(tree.tentative_distance(1).is_infinite());

        let result = tree.relax((2, 3), 1);
        assert_eq!(result, Err(Error::UnreachableRelaxation { trigger: 1 }));

        // nothing was consumed
        assert!(tree.incident.contains((2, 3)));
        assert_eq!(tree.stats.relaxations, 0);
        assert!(tree.tentative_distance(3).is_infinite());
    }

    #[test]
    fn test_relax_processes_an_edge_once() {
        let mut tree = diamond_tree();
        tree.labeled[0] = true;

        assert_eq!(tree.relax((2, 3), 0), Ok(true));
        assert_eq!(tree.tentative_distance(3), OrderedFloat(1.0));
        assert_eq!(tree.tentative_predecessor(3), Some(2));
        assert_eq!(tree.process_cause(3), Some(0));
        assert!(tree.incident_edges(2).is_empty());
        assert!(tree.incident_edges(3).is_empty());

        assert_eq!(tree.relax((2, 3), 0), Ok(false));
        assert_eq!(tree.stats.relaxations, 1);
    }

    #[test]
    fn test_unreached_seeds_are_not_stale() {
        let mut tree = diamond_tree();
        tree.label_all().unwrap();

        let stats = tree.stats();
        // three infinite seeds, no superseded entry
        assert_eq!(stats.stale_entries, 0);
        assert_eq!(stats.labeled, 2);
        assert_eq!(stats.improvements, 1);
    }
}
