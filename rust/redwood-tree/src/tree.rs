use std::fmt;

use tracing::debug;

use crate::{Color, NodeId, NodeRef, Side, arena::Arena};

/// The root holder of a tree.
///
/// Conceptually this is the left link of the sentinel node
/// ([`NodeId::HEADER`]). The sentinel's other role, marking the end of
/// iteration, needs no state at all, and its nominal color is never read, so
/// neither is stored.
#[derive(Clone, Debug, Default)]
struct Header {
    root: Option<NodeId>,
}

/// An ordered set of unique values, balanced as a red-black tree.
///
/// After every public mutating operation the tree upholds:
///
/// 1. In-order values are strictly increasing.
/// 2. No two values compare equal.
/// 3. Absent children count as black.
/// 4. The root, if present, is black.
/// 5. A red node never has a red child.
/// 6. Every path from the root to an absent child passes the same number of
///    black nodes.
///
/// (Trees assembled verbatim through a [`TreeBuilder`](crate::TreeBuilder)
/// keep whatever colors they were given; [`Tree::validate`] reports on them.)
///
/// The tree is single-threaded: it performs no synchronization of its own.
#[derive(Clone)]
pub struct Tree<T> {
    header: Header,
    pub(crate) nodes: Arena<T>,
    pub(crate) len: usize,
}

impl<T> Tree<T> {
    /// Creates a new, empty [`Tree`].
    pub fn new() -> Self {
        Self {
            header: Header::default(),
            nodes: Arena::new(),
            len: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.header.root.is_none()
    }

    /// Returns the root node of this tree.
    ///
    /// Returns `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.header.root
    }

    /// Returns the value held by the root of this tree.
    pub fn root_value(&self) -> Option<&T> {
        self.root().map(|root| &self.nodes.node(root).value)
    }

    /// Returns a read-only view of the node behind `id`.
    ///
    /// Returns `None` for [`NodeId::HEADER`] and for handles of removed nodes.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.nodes.get(id).map(|node| NodeRef::new(id, node))
    }

    /// Returns the value held by the node behind `id`.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Removes every value from the tree. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!(removed = self.len, "clearing tree");
        }
        self.nodes.clear();
        self.header.root = None;
        self.len = 0;
    }

    /// The child of `parent` on `side`. The header's only child is the root,
    /// on its left.
    pub(crate) fn child_of(&self, parent: NodeId, side: Side) -> Option<NodeId> {
        if parent.is_header() {
            return match side {
                Side::Left => self.header.root,
                Side::Right => None,
            };
        }
        self.nodes.node(parent).child(side)
    }

    pub(crate) fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        if parent.is_header() {
            match side {
                Side::Left => self.header.root = child,
                Side::Right => panic!("the header only holds the root, as its left child"),
            }
            return;
        }
        *self.nodes.node_mut(parent).child_mut(side) = child;
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.nodes.node(id).parent
    }

    /// Which side of its parent `id` hangs on. The root hangs on the left of
    /// the header.
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        let parent = self.parent_of(id);
        if parent.is_header() || self.nodes.node(parent).left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Puts `replacement` (or nothing) where `old` hangs under its parent.
    /// `old` keeps its own links.
    pub(crate) fn replace_child(&mut self, old: NodeId, replacement: Option<NodeId>) {
        let parent = self.parent_of(old);
        let side = self.side_of(old);
        self.set_child(parent, side, replacement);
        if let Some(replacement) = replacement {
            self.nodes.node_mut(replacement).parent = parent;
        }
    }

    /// Absent children are black.
    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.nodes.node(id).color.is_red())
    }

    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        self.nodes.node(id).color
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes.node_mut(id).color = color;
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}
