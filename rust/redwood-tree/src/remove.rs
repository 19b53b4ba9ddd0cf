use std::borrow::Borrow;

use tracing::{debug, trace};

use crate::{Color, NodeId, Side, Tree};

impl<T> Tree<T> {
    /// Removes a single node and returns its value, keeping the tree
    /// balanced.
    ///
    /// A node with two children takes over the value of its in-order
    /// successor, and the successor's node is removed in its place. Any
    /// handle to that successor is invalid afterwards; `node` keeps
    /// referring to a live node holding the successor's value.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a live node of this tree.
    pub fn erase_node(&mut self, node: NodeId) -> T {
        let mut target = node;
        let current = self.nodes.node(node);
        if let (Some(_), Some(right)) = (current.left, current.right) {
            let successor = self.descend(right, Side::Left);
            trace!(%node, %successor, "erase: swapping with successor");
            self.nodes.swap_values(node, successor);
            target = successor;
        }

        let removed = self.nodes.node(target);
        let child = removed.left.or(removed.right);
        let parent = removed.parent;
        let color = removed.color;
        let side = self.side_of(target);

        self.replace_child(target, child);
        let removed = self.nodes.release(target);
        self.len -= 1;

        if color.is_black() {
            match child {
                Some(child) if self.color_of(child).is_red() => {
                    self.set_color(child, Color::Black);
                }
                _ => self.rebalance_after_erase(child, parent, side),
            }
        }

        if self.len == 0 {
            self.nodes.clear();
        }

        removed.value
    }

    /// Removes the value equal to `key`, returning it.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find(key, None).found()?;
        Some(self.erase_node(node))
    }

    /// Removes `subtree` and everything below it, returning the number of
    /// values dropped. [`NodeId::HEADER`] stands for the whole tree.
    ///
    /// Only removing the whole tree keeps the color invariants: a proper
    /// subtree is cut out without rebalancing what remains.
    pub fn remove_subtree(&mut self, subtree: NodeId) -> usize {
        let top = if subtree.is_header() {
            match self.root() {
                Some(root) => root,
                None => return 0,
            }
        } else {
            subtree
        };

        self.replace_child(top, None);

        let mut removed = 0;
        let mut pending = vec![top];
        while let Some(id) = pending.pop() {
            let node = self.nodes.release(id);
            pending.extend(node.left);
            pending.extend(node.right);
            removed += 1;
        }

        self.len -= removed;
        if self.len == 0 {
            self.nodes.clear();
        }
        debug!(%top, removed, remaining = self.len, "removed subtree");

        removed
    }

    /// Pushes the extra black left behind by a removed black node up the
    /// tree. `x` is the (possibly absent) node carrying it, hanging on `side`
    /// of `parent`.
    fn rebalance_after_erase(&mut self, mut x: Option<NodeId>, mut parent: NodeId, mut side: Side) {
        while !parent.is_header() && !self.is_red(x) {
            let Some(mut sibling) = self.child_of(parent, side.opposite()) else {
                (x, parent, side) = self.lift(parent);
                continue;
            };

            if self.color_of(sibling).is_red() {
                trace!(%parent, %sibling, "erase: red sibling");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                match self.child_of(parent, side.opposite()) {
                    Some(next) => sibling = next,
                    None => {
                        (x, parent, side) = self.lift(parent);
                        continue;
                    }
                }
            }

            let near = self.child_of(sibling, side);
            let far = self.child_of(sibling, side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                trace!(%parent, %sibling, "erase: black nephews, moving up");
                self.set_color(sibling, Color::Red);
                (x, parent, side) = self.lift(parent);
                continue;
            }

            if !self.is_red(far) {
                trace!(%parent, %sibling, "erase: red near nephew");
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = match self.child_of(parent, side.opposite()) {
                    Some(next) => next,
                    None => break,
                };
            }

            trace!(%parent, %sibling, "erase: red far nephew");
            let far = self.child_of(sibling, side.opposite());
            self.set_color(sibling, self.color_of(parent));
            self.set_color(parent, Color::Black);
            if let Some(far) = far {
                self.set_color(far, Color::Black);
            }
            self.rotate(parent, side);
            x = self.root();
            break;
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }

    /// One step up: `node` becomes the carrier, hanging under its parent.
    fn lift(&self, node: NodeId) -> (Option<NodeId>, NodeId, Side) {
        (Some(node), self.parent_of(node), self.side_of(node))
    }
}
