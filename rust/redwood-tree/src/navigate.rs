use crate::{NodeId, Side, Tree};

impl<T> Tree<T> {
    /// The node holding the smallest value of `subtree` (the whole tree when
    /// `None` or [`NodeId::HEADER`]). `None` when that subtree is empty.
    pub fn minimal_node(&self, subtree: Option<NodeId>) -> Option<NodeId> {
        self.extreme(subtree, Side::Left)
    }

    /// The node holding the greatest value of `subtree` (the whole tree when
    /// `None` or [`NodeId::HEADER`]). `None` when that subtree is empty.
    pub fn maximal_node(&self, subtree: Option<NodeId>) -> Option<NodeId> {
        self.extreme(subtree, Side::Right)
    }

    /// The in-order successor of `node`, or [`NodeId::HEADER`] past the
    /// greatest value. The successor of the header is the minimal node.
    pub fn next_node(&self, node: NodeId) -> NodeId {
        self.step(node, Side::Right)
    }

    /// The in-order predecessor of `node`, or [`NodeId::HEADER`] before the
    /// smallest value. The predecessor of the header is the maximal node.
    pub fn previous_node(&self, node: NodeId) -> NodeId {
        self.step(node, Side::Left)
    }

    /// Follows `side` links from `node` until there are none left.
    pub(crate) fn descend(&self, mut node: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.nodes.node(node).child(side) {
            node = child;
        }
        node
    }

    fn extreme(&self, subtree: Option<NodeId>, side: Side) -> Option<NodeId> {
        let start = match subtree {
            Some(id) if !id.is_header() => Some(id),
            _ => self.root(),
        };
        start.map(|id| self.descend(id, side))
    }

    fn step(&self, node: NodeId, side: Side) -> NodeId {
        if node.is_header() {
            return self
                .extreme(None, side.opposite())
                .unwrap_or(NodeId::HEADER);
        }

        if let Some(child) = self.nodes.node(node).child(side) {
            return self.descend(child, side.opposite());
        }

        let mut current = node;
        loop {
            let parent = self.parent_of(current);
            if parent.is_header() || self.side_of(current) == side.opposite() {
                return parent;
            }
            current = parent;
        }
    }
}
