use std::cmp::Ordering;

use tracing::trace;

use crate::{Color, Lookup, Node, NodeId, Position, Side, Tree};

impl<T: Ord> Tree<T> {
    /// Attaches `value` as a red leaf at `position` and rebalances.
    ///
    /// `position` must come from a [`Tree::find`] for `value` that reported
    /// [`Lookup::Vacant`], with no mutation in between. Returns the handle of
    /// the new node.
    ///
    /// # Panics
    ///
    /// Panics if the slot at `position` is already occupied, or if `value`
    /// does not belong on that side of the parent.
    pub fn insert(&mut self, position: Position, value: T) -> NodeId {
        let Position { parent, side } = position;

        if parent.is_header() {
            assert!(
                side == Side::Left && self.root().is_none(),
                "only an empty tree accepts a new root"
            );
        } else {
            let node = self.nodes.node(parent);
            assert!(
                node.child(side).is_none(),
                "the {side} child of {parent} is already occupied"
            );
            let expected = match side {
                Side::Left => Ordering::Less,
                Side::Right => Ordering::Greater,
            };
            assert!(
                value.cmp(&node.value) == expected,
                "value does not belong on the {side} of {parent}"
            );
        }

        let id = self.nodes.allocate(Node::leaf(value, parent));
        self.set_child(parent, side, Some(id));
        self.len += 1;

        self.rebalance_after_insert(id);
        id
    }

    /// Inserts `value` unless an equal value is already present.
    ///
    /// Returns `false`, dropping `value`, when an equal value is present.
    pub fn add(&mut self, value: T) -> bool {
        match self.find(&value, None) {
            Lookup::Found(_) => false,
            Lookup::Vacant(position) => {
                self.insert(position, value);
                true
            }
        }
    }

    /// Restores the color invariants after `x` was attached as a red leaf.
    fn rebalance_after_insert(&mut self, mut x: NodeId) {
        loop {
            let parent = self.parent_of(x);
            if parent.is_header() || self.color_of(parent).is_black() {
                break;
            }

            let grandparent = self.parent_of(parent);
            if grandparent.is_header() {
                // A red root; it is blackened below
                break;
            }

            let parent_side = self.side_of(parent);
            let uncle = self
                .child_of(grandparent, parent_side.opposite())
                .filter(|uncle| self.color_of(*uncle).is_red());

            if let Some(uncle) = uncle {
                trace!(node = %x, %grandparent, "insert: red uncle, recoloring");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                x = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.side_of(x) != parent_side {
                trace!(node = %x, "insert: inner grandchild, rotating parent");
                self.rotate(parent, parent_side);
                x = parent;
                parent = self.parent_of(x);
            }

            trace!(node = %x, %grandparent, "insert: outer grandchild, rotating grandparent");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
            break;
        }

        if let Some(root) = self.root() {
            self.set_color(root, Color::Black);
        }
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}
