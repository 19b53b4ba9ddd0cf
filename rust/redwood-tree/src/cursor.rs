use std::{fmt, ptr};

use crate::{NodeId, Tree};

/// A bidirectional position in the in-order sequence of a [`Tree`].
///
/// A cursor either rests on a node or on the end of the sequence
/// ([`NodeId::HEADER`]). Moving forward past the greatest value lands on the
/// end; moving backward from the end lands on the greatest value.
///
/// Two cursors are equal only when they rest on the same node of the same
/// tree instance, even if another tree holds identical values.
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    node: NodeId,
}

impl<'a, T> Cursor<'a, T> {
    /// The tree this cursor walks.
    pub fn tree(&self) -> &'a Tree<T> {
        self.tree
    }

    /// The node the cursor rests on; [`NodeId::HEADER`] at the end.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Returns `true` if the cursor is past the last value.
    pub fn is_end(&self) -> bool {
        self.node.is_header()
    }

    /// The value under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        self.tree.value(self.node)
    }

    /// Moves to the in-order successor.
    pub fn move_next(&mut self) {
        self.node = self.tree.next_node(self.node);
    }

    /// Moves to the in-order predecessor.
    pub fn move_prev(&mut self) {
        self.node = self.tree.previous_node(self.node);
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("tree", &ptr::from_ref(self.tree))
            .field("node", &self.node)
            .finish()
    }
}

impl<T> Tree<T> {
    /// A cursor on the smallest value, or [`Tree::end`] if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor {
            tree: self,
            node: self.minimal_node(None).unwrap_or(NodeId::HEADER),
        }
    }

    /// A cursor past the greatest value.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor {
            tree: self,
            node: NodeId::HEADER,
        }
    }

    /// A cursor resting on `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is neither the header nor a live node of this tree.
    pub fn cursor_at(&self, node: NodeId) -> Cursor<'_, T> {
        assert!(
            node.is_header() || self.nodes.get(node).is_some(),
            "{node} does not refer to a live node"
        );
        Cursor { tree: self, node }
    }
}
