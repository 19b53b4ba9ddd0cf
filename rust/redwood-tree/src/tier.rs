use crate::{Combine, NodeId, TraversalOrder, TraversalQueue, Tree};

/// The values found at one structural depth of a [`Tree`], left to right.
///
/// Created by [`Tree::tier`]. The walk is depth-first and never descends
/// below the requested depth.
pub struct Tier<'a, T> {
    tree: &'a Tree<T>,
    depth: usize,
    queue: TraversalQueue<(NodeId, usize)>,
}

impl<'a, T> Iterator for Tier<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, depth) = self.queue.dequeue()?;
            let node = self.tree.nodes.node(node);
            if depth == self.depth {
                return Some(&node.value);
            }
            self.queue.enqueue(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1)),
            );
        }
    }
}

impl<T> Tree<T> {
    /// The values at `depth`, where the root is at depth 0.
    pub fn tier(&self, depth: usize) -> Tier<'_, T> {
        let mut queue = TraversalOrder::DepthFirst.queue();
        queue.enqueue(self.root().map(|root| (root, 0)));
        Tier {
            tree: self,
            depth,
            queue,
        }
    }

    /// Combines the values at `depth` left to right, starting from
    /// [`Combine::empty`].
    ///
    /// An empty tree, or a depth below the deepest node, yields
    /// [`Combine::empty`].
    pub fn sum_one_tier(&self, depth: usize) -> T
    where
        T: Combine,
    {
        self.tier(depth)
            .fold(T::empty(), |total, value| total.combine(value))
    }
}
