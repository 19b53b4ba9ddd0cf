use tracing::debug;

use crate::{Color, Node, NodeId, Position, RedwoodTreeError, Side, Tree};

/// Assembles a [`Tree`] from an explicit shape.
///
/// Nodes are supplied in pre-order: each node is followed by the whole of its
/// left subtree and then the whole of its right subtree, with every absent
/// child spelled out through [`TreeBuilder::null`]. Colors are kept exactly
/// as given, so the result may violate the color invariants;
/// [`Tree::validate`] reports on that.
///
/// ```rust
/// use redwood_tree::{Color, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder.node(2, Color::Black)?;
/// builder.node(1, Color::Red)?;
/// builder.null()?;
/// builder.null()?;
/// builder.null()?;
///
/// let tree = builder.finish()?;
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// # Ok::<(), redwood_tree::RedwoodTreeError>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder<T> {
    tree: Tree<T>,
    open: Vec<Position>,
}

impl<T> TreeBuilder<T> {
    /// Creates a builder expecting the root (or a `null` for an empty tree).
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            open: vec![Position::ROOT],
        }
    }

    /// Fills the next position with a node.
    pub fn node(&mut self, value: T, color: Color) -> Result<NodeId, RedwoodTreeError> {
        let Position { parent, side } = self.next_position()?;

        let id = self
            .tree
            .nodes
            .allocate(Node::with_color(value, color, parent));
        self.tree.set_child(parent, side, Some(id));
        self.tree.len += 1;

        self.open.push(Position {
            parent: id,
            side: Side::Right,
        });
        self.open.push(Position {
            parent: id,
            side: Side::Left,
        });

        Ok(id)
    }

    /// Leaves the next position empty.
    pub fn null(&mut self) -> Result<(), RedwoodTreeError> {
        self.next_position().map(|_| ())
    }

    /// Returns `true` once every position has been filled.
    pub fn is_complete(&self) -> bool {
        self.open.is_empty()
    }

    /// The number of nodes supplied so far.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if no node has been supplied yet.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn next_position(&mut self) -> Result<Position, RedwoodTreeError> {
        self.open.pop().ok_or(RedwoodTreeError::ExcessShape)
    }
}

impl<T: Ord> TreeBuilder<T> {
    /// Completes the tree, checking that it is fully shaped and that its
    /// values are in order.
    pub fn finish(self) -> Result<Tree<T>, RedwoodTreeError> {
        if !self.open.is_empty() {
            return Err(RedwoodTreeError::IncompleteShape(self.open.len()));
        }
        self.tree.check_order()?;
        debug!(len = self.tree.len(), "assembled tree");
        Ok(self.tree)
    }
}

impl<T> Default for TreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates a [`TreeBuilder`].
    pub fn builder() -> TreeBuilder<T> {
        TreeBuilder::new()
    }
}
