use std::fmt;

/// A stable handle to a node owned by a [`Tree`](crate::Tree).
///
/// Handles stay valid until the node they refer to is removed. A removed
/// node's handle may later be reused for a newly inserted node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The sentinel of every tree. It holds the root as its left child, never
    /// carries a value and marks the end of in-order iteration.
    ///
    /// The sentinel is nominally red so that it can never be mistaken for a
    /// real root, but no algorithm ever consults its color.
    pub const HEADER: NodeId = NodeId(usize::MAX);

    /// Returns `true` if this is the sentinel handle.
    pub fn is_header(self) -> bool {
        self == Self::HEADER
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_header() {
            write!(f, "header")
        } else {
            write!(f, "node #{}", self.0)
        }
    }
}

/// The color of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red node. Red nodes never have red children.
    Red,
    /// A black node. Absent children are considered black.
    #[default]
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    pub fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` for [`Color::Black`].
    pub fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// The lowercase name of this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which child of a node is meant.
///
/// Rebalancing cases come in mirrored pairs; they are written once in terms
/// of a [`Side`] and its [`Side::opposite`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The child holding smaller values.
    Left,
    /// The child holding greater values.
    Right,
}

impl Side {
    /// The mirror image of this side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: NodeId,
}

impl<T> Node<T> {
    /// New nodes are always attached as red leaves.
    pub(crate) fn leaf(value: T, parent: NodeId) -> Self {
        Self::with_color(value, Color::Red, parent)
    }

    pub(crate) fn with_color(value: T, color: Color, parent: NodeId) -> Self {
        Self {
            value,
            color,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A read-only view of a node in a [`Tree`](crate::Tree).
pub struct NodeRef<'a, T> {
    id: NodeId,
    node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(id: NodeId, node: &'a Node<T>) -> Self {
        Self { id, node }
    }

    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value owned by this node.
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// The color of this node.
    pub fn color(&self) -> Color {
        self.node.color
    }

    /// Returns `true` if this node is red.
    pub fn is_red(&self) -> bool {
        self.node.color.is_red()
    }

    /// Returns `true` if this node is black.
    pub fn is_black(&self) -> bool {
        self.node.color.is_black()
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.node.left
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.node.right
    }

    /// The child on the given side, if any.
    pub fn child(&self, side: Side) -> Option<NodeId> {
        self.node.child(side)
    }

    /// The parent of this node; [`NodeId::HEADER`] for the root.
    pub fn parent(&self) -> NodeId {
        self.node.parent
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .field("color", &self.node.color)
            .field("left", &self.node.left)
            .field("right", &self.node.right)
            .field("parent", &self.node.parent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_mirror_each_other() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Left.opposite().opposite(), Side::Left);
    }

    #[test]
    fn new_leaves_are_red() {
        let node = Node::leaf(7, NodeId::HEADER);
        assert!(node.color.is_red());
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.child(Side::Right), None);
    }

    #[test]
    fn header_is_displayed_by_role() {
        assert_eq!(NodeId::HEADER.to_string(), "header");
        assert_eq!(NodeId(3).to_string(), "node #3");
        assert_eq!(Color::Red.to_string(), "red");
        assert_eq!(Color::Black.to_string(), "black");
    }
}
