use std::collections::VecDeque;

use crate::{NodeId, Tree};

/// Traversal order for tree iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Visit children before siblings (uses stack internally).
    #[default]
    DepthFirst,
    /// Visit all nodes at each level before going deeper (uses queue internally).
    BreadthFirst,
}

impl TraversalOrder {
    /// Create a new traversal queue for this order.
    pub fn queue<T>(self) -> TraversalQueue<T> {
        TraversalQueue {
            order: self,
            items: VecDeque::new(),
        }
    }
}

/// A queue that manages traversal order automatically.
///
/// Created via [`TraversalOrder::queue()`].
#[derive(Debug, Clone)]
pub struct TraversalQueue<T> {
    order: TraversalOrder,
    items: VecDeque<T>,
}

impl<T> TraversalQueue<T> {
    /// Remove and return the next item according to traversal order.
    ///
    /// - `DepthFirst`: pops from back (stack/LIFO)
    /// - `BreadthFirst`: pops from front (queue/FIFO)
    pub fn dequeue(&mut self) -> Option<T> {
        match self.order {
            TraversalOrder::DepthFirst => self.items.pop_back(),
            TraversalOrder::BreadthFirst => self.items.pop_front(),
        }
    }

    /// Add items in the appropriate order for this traversal.
    ///
    /// - `DepthFirst`: adds in reverse order so first item is processed first
    /// - `BreadthFirst`: adds in forward order (left-to-right)
    pub fn enqueue<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        match self.order {
            TraversalOrder::DepthFirst => self.items.extend(items.into_iter().rev()),
            TraversalOrder::BreadthFirst => self.items.extend(items),
        }
    }
}

/// Visits every node of a [`Tree`] together with its depth (the root is at
/// depth 0).
///
/// Created by [`Tree::traverse`]. Depth-first order is pre-order; breadth-first
/// order visits each tier left to right.
pub struct Traverse<'a, T> {
    tree: &'a Tree<T>,
    queue: TraversalQueue<(NodeId, usize)>,
}

impl<T> Iterator for Traverse<'_, T> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.queue.dequeue()?;
        let links = self.tree.nodes.node(node);
        self.queue.enqueue(
            [links.left, links.right]
                .into_iter()
                .flatten()
                .map(|child| (child, depth + 1)),
        );
        Some((node, depth))
    }
}

impl<T> Tree<T> {
    /// Visits every node in the given order.
    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, T> {
        let mut queue = order.queue();
        queue.enqueue(self.root().map(|root| (root, 0)));
        Traverse { tree: self, queue }
    }

    /// The number of tiers: 0 for an empty tree, 1 for a lone root.
    pub fn height(&self) -> usize {
        self.traverse(TraversalOrder::DepthFirst)
            .map(|(_, depth)| depth + 1)
            .max()
            .unwrap_or(0)
    }
}
