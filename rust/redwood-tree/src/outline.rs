use crate::{NodeId, NodeRef, Tree};

/// One line of a tree's outline: a node, or an absent child, at some depth.
pub struct OutlineItem<'a, T> {
    /// The depth of this entry; the root is at depth 0.
    pub depth: usize,
    /// The node, or `None` for an absent child.
    pub node: Option<NodeRef<'a, T>>,
}

/// A pre-order walk over every node of a [`Tree`] and every absent child.
///
/// Created by [`Tree::outline`]. Each node is followed by the outline of its
/// left subtree and then that of its right subtree. An empty tree is
/// outlined as a single absent root.
pub struct Outline<'a, T> {
    tree: &'a Tree<T>,
    pending: Vec<(Option<NodeId>, usize)>,
}

impl<'a, T> Iterator for Outline<'a, T> {
    type Item = OutlineItem<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, depth) = self.pending.pop()?;
        let node = slot.and_then(|id| self.tree.node(id));
        if let Some(node) = node {
            self.pending.push((node.right(), depth + 1));
            self.pending.push((node.left(), depth + 1));
        }
        Some(OutlineItem { depth, node })
    }
}

impl<T> Tree<T> {
    /// Outlines the shape of the tree, absent children included.
    pub fn outline(&self) -> Outline<'_, T> {
        Outline {
            tree: self,
            pending: vec![(self.root(), 0)],
        }
    }
}
