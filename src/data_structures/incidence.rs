use crate::data_structures::TreeNumbering;

/// A directed edge `(tail, head)`
pub type Edge = (usize, usize);

/// For each vertex, the non-tree edges touching it.
///
/// Every list is kept in ascending preorder of the edge's far endpoint. A subtree
/// of the shortest-path tree occupies a contiguous preorder range, so the edges
/// leading into the subtree of a vertex sit in the middle of its list and the
/// edges leaving it sit at both ends. Subtree scans rely on this to stop as soon
/// as they meet an edge that stays inside the subtree.
///
/// Lists only shrink after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceLists {
    lists: Vec<Vec<Edge>>,
}

impl IncidenceLists {
    pub fn new(vertex_count: usize) -> Self {
        IncidenceLists {
            lists: vec![Vec::new(); vertex_count],
        }
    }

    /// Adds `edge` to the lists of both of its endpoints.
    ///
    /// It goes in front of the first listed edge whose far endpoint has a larger
    /// preorder number than the far endpoint of `edge`, or at the back.
    pub fn insert(&mut self, edge: Edge, numbering: &TreeNumbering) {
        let (tail, head) = edge;
        for (near, far) in [(tail, head), (head, tail)] {
            let far_pre = numbering.pre(far);
            let list = &mut self.lists[near];
            let position = list
                .iter()
                .position(|&listed| numbering.pre(other_endpoint(listed, near)) > far_pre)
                .unwrap_or(list.len());
            list.insert(position, edge);
        }
    }

    /// Edges incident to `vertex`, in list order
    pub fn edges(&self, vertex: usize) -> &[Edge] {
        self.lists.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, vertex: usize) -> usize {
        self.edges(vertex).len()
    }

    pub fn is_empty(&self, vertex: usize) -> bool {
        self.edges(vertex).is_empty()
    }

    /// True if `edge` is still listed at both of its endpoints
    pub fn contains(&self, edge: Edge) -> bool {
        self.edges(edge.0).contains(&edge) && self.edges(edge.1).contains(&edge)
    }

    /// Removes `edge` from both endpoint lists. Returns false if it was not listed.
    pub fn remove(&mut self, edge: Edge) -> bool {
        let mut removed = false;
        for endpoint in [edge.0, edge.1] {
            if let Some(list) = self.lists.get_mut(endpoint) {
                if let Some(position) = list.iter().position(|&listed| listed == edge) {
                    list.remove(position);
                    removed = true;
                }
            }
        }
        removed
    }
}

/// The endpoint of `edge` that is not `vertex`
pub fn other_endpoint(edge: Edge, vertex: usize) -> usize {
    if edge.0 == vertex {
        edge.1
    } else {
        edge.0
    }
}
