/// Preorder and postorder numbering of a rooted tree for O(1) ancestor queries.
///
/// The numbering is written once, by [`TreeNumbering::from_parents`], and exposes no
/// way to change it. Suurballe's algorithm cuts its working tree apart while it runs
/// but keeps asking ancestor questions about the *original* shortest-path tree, so
/// recomputing these numbers mid-run would silently break every wasted-edge test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNumbering {
    root: usize,
    pre: Vec<Option<usize>>,
    post: Vec<Option<usize>>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl TreeNumbering {
    /// Numbers the tree hanging from `root`, where `parents[v]` is the parent of `v`.
    ///
    /// Children are visited in ascending vertex order. Vertices that cannot reach
    /// `root` through `parents` stay unnumbered.
    pub fn from_parents(root: usize, parents: &[Option<usize>]) -> Self {
        let n = parents.len().max(root + 1);
        let mut children = vec![Vec::new(); n];
        for (v, parent) in parents.iter().enumerate() {
            if let Some(p) = *parent {
                if v != root && p < n {
                    children[p].push(v);
                }
            }
        }
        Self::from_children(root, &children)
    }

    /// Numbers the tree given as child lists, visiting children in list order
    pub fn from_children(root: usize, children: &[Vec<usize>]) -> Self {
        let n = children.len().max(root + 1);
        let mut pre = vec![None; n];
        let mut post = vec![None; n];
        let mut preorder = Vec::new();
        let mut postorder = Vec::new();

        // (vertex, index of the next child to descend into)
        let mut stack = vec![(root, 0usize)];
        pre[root] = Some(0);
        preorder.push(root);

        while let Some(frame) = stack.last_mut() {
            let (vertex, next_child) = *frame;
            let kids = children.get(vertex).map(Vec::as_slice).unwrap_or(&[]);
            if let Some(&child) = kids.get(next_child) {
                frame.1 += 1;
                if pre[child].is_some() {
                    continue;
                }
                pre[child] = Some(preorder.len());
                preorder.push(child);
                stack.push((child, 0));
            } else {
                post[vertex] = Some(postorder.len());
                postorder.push(vertex);
                stack.pop();
            }
        }

        TreeNumbering {
            root,
            pre,
            post,
            preorder,
            postorder,
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Preorder number of `vertex`, `None` if it is not in the tree
    pub fn pre(&self, vertex: usize) -> Option<usize> {
        self.pre.get(vertex).copied().flatten()
    }

    /// Postorder number of `vertex`, `None` if it is not in the tree
    pub fn post(&self, vertex: usize) -> Option<usize> {
        self.post.get(vertex).copied().flatten()
    }

    /// Tree vertices in preorder
    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    /// Tree vertices in postorder
    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    /// True iff `ancestor` is `descendant` or lies on the path from the root to it
    pub fn is_ancestor(&self, ancestor: usize, descendant: usize) -> bool {
        match (
            self.pre(ancestor),
            self.post(ancestor),
            self.pre(descendant),
            self.post(descendant),
        ) {
            (Some(pre_a), Some(post_a), Some(pre_d), Some(post_d)) => {
                pre_a <= pre_d && post_a >= post_d
            }
            _ => false,
        }
    }
}
