use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::{Error, Result};

use super::{DisjointPaths, SuurballeTree};

impl<W> SuurballeTree<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Total cost of the least-cost pair of edge-disjoint paths from the source to
    /// `target`, or `None` if no such pair exists.
    pub fn disjoint_path_cost(&self, target: usize) -> Option<W> {
        let reduced = self.tentative_distance(target);
        if reduced.is_infinite() {
            return None;
        }
        let distance = self.distance_from_source(target)?;
        Some(distance + distance + reduced)
    }

    /// Reconstructs the pair of edge-disjoint paths from `source` to `target`.
    ///
    /// Returns `([source], [])` when `target == source` and two empty paths when
    /// `target` has no disjoint pair.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedReconstruction`] if a walk towards `source` runs into a
    /// vertex with no predecessor or parent, which happens when the tree was not
    /// built from `source`.
    pub fn extract_paths(&self, source: usize, target: usize) -> Result<DisjointPaths> {
        let n = self.vertex_count();
        for vertex in [source, target] {
            if vertex >= n {
                return Err(Error::InvalidVertex(vertex));
            }
        }

        if source == target {
            return Ok(DisjointPaths {
                first: vec![source],
                second: Vec::new(),
            });
        }
        if self.disjoint_path_cost(target).is_none() {
            return Ok(DisjointPaths::default());
        }

        let mut marked = self.mark_causes(source, target)?;
        let first = self.trace_back(source, target, &mut marked)?;
        let second = self.trace_back(source, target, &mut marked)?;

        Ok(DisjointPaths { first, second })
    }

    /// The single shortest path from the source to `target` in the original tree
    pub fn shortest_path(&self, target: usize) -> Option<Vec<usize>> {
        self.distance_from_source(target)?;
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.tree_parent(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Marks `target` and every vertex on its chain of process causes
    fn mark_causes(&self, source: usize, target: usize) -> Result<Vec<bool>> {
        let mut marked = vec![false; self.vertex_count()];
        let mut x = target;
        while x != source {
            if marked[x] {
                return Err(Error::MalformedReconstruction { vertex: x, target });
            }
            marked[x] = true;
            x = match self.process_cause(x) {
                Some(cause) if cause == x => source,
                Some(cause) => cause,
                None => return Err(Error::MalformedReconstruction { vertex: x, target }),
            };
        }
        Ok(marked)
    }

    /// Walks from `target` back to `source`, leaving each marked vertex through its
    /// tentative predecessor (and unmarking it) and every other vertex through its
    /// original tree parent.
    fn trace_back(&self, source: usize, target: usize, marked: &mut [bool]) -> Result<Vec<usize>> {
        // a path uses every edge at most once
        let max_len = self.transformed_cost.len() + 1;
        let mut path = vec![target];
        let mut x = target;

        while x != source {
            let next = if marked[x] {
                marked[x] = false;
                self.tentative_predecessor(x)
            } else {
                self.tree_parent(x)
            };
            x = next.ok_or(Error::MalformedReconstruction { vertex: x, target })?;
            path.push(x);
            if path.len() > max_len {
                return Err(Error::MalformedReconstruction { vertex: x, target });
            }
        }

        path.reverse();
        Ok(path)
    }
}
