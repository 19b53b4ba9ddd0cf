use std::iter::FusedIterator;

use crate::{NodeId, Tree};

/// An in-order iterator over the values of a [`Tree`].
///
/// Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front;
        self.front = self.tree.next_node(node);
        self.remaining -= 1;
        self.tree.value(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back;
        self.back = self.tree.previous_node(node);
        self.remaining -= 1;
        self.tree.value(node)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T> Tree<T> {
    /// Iterates over the values in increasing order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            front: self.minimal_node(None).unwrap_or(NodeId::HEADER),
            back: self.maximal_node(None).unwrap_or(NodeId::HEADER),
            remaining: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn iterates_from_both_ends() {
        let tree: Tree<u32> = (1..=5).rev().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn reverse_is_the_mirror_of_forward() {
        let tree: Tree<u32> = [9, 4, 7, 1, 8].into_iter().collect();
        let mut forward: Vec<_> = tree.iter().collect();
        let backward: Vec<_> = tree.iter().rev().collect();
        forward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn borrowed_tree_is_iterable() {
        let tree: Tree<u32> = [3, 1, 2].into_iter().collect();
        let mut seen = Vec::new();
        for value in &tree {
            seen.push(*value);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
