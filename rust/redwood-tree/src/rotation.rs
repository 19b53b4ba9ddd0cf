use tracing::trace;

use crate::{NodeId, Side, Tree};

impl<T> Tree<T> {
    /// Rotates `x` to the left: its right child takes its place and `x`
    /// becomes that child's left child. In-order sequence is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no right child.
    pub fn rotate_left(&mut self, x: NodeId) {
        self.rotate(x, Side::Left);
    }

    /// Rotates `x` to the right: its left child takes its place and `x`
    /// becomes that child's right child. In-order sequence is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no left child.
    pub fn rotate_right(&mut self, x: NodeId) {
        self.rotate(x, Side::Right);
    }

    /// Moves `x` down towards `direction`, promoting its child on the
    /// opposite side.
    pub(crate) fn rotate(&mut self, x: NodeId, direction: Side) {
        let pivot_side = direction.opposite();
        let Some(pivot) = self.nodes.node(x).child(pivot_side) else {
            panic!("cannot rotate {x} {direction}: it has no {pivot_side} child");
        };
        trace!(%x, %pivot, %direction, "rotate");

        // The pivot's inner subtree changes hands
        let inner = self.nodes.node(pivot).child(direction);
        *self.nodes.node_mut(x).child_mut(pivot_side) = inner;
        if let Some(inner) = inner {
            self.nodes.node_mut(inner).parent = x;
        }

        self.replace_child(x, Some(pivot));
        *self.nodes.node_mut(pivot).child_mut(direction) = Some(x);
        self.nodes.node_mut(x).parent = pivot;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, NodeId, Tree, TreeBuilder};

    /// ```text
    ///     2            4
    ///    / \          / \
    ///   1   4   =>   2   5
    ///      / \      / \
    ///     3   5    1   3
    /// ```
    fn right_leaning() -> Tree<u32> {
        let mut builder = TreeBuilder::new();
        builder.node(2, Color::Black).unwrap();
        builder.node(1, Color::Black).unwrap();
        builder.null().unwrap();
        builder.null().unwrap();
        builder.node(4, Color::Red).unwrap();
        builder.node(3, Color::Black).unwrap();
        builder.null().unwrap();
        builder.null().unwrap();
        builder.node(5, Color::Black).unwrap();
        builder.null().unwrap();
        builder.null().unwrap();
        builder.finish().unwrap()
    }

    fn values(tree: &Tree<u32>) -> Vec<u32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn rotate_left_promotes_the_right_child() {
        let mut tree = right_leaning();
        let two = tree.find(&2, None).found().unwrap();
        let three = tree.find(&3, None).found().unwrap();
        let four = tree.find(&4, None).found().unwrap();

        tree.rotate_left(two);

        assert_eq!(tree.root(), Some(four));
        let four_ref = tree.node(four).unwrap();
        assert_eq!(four_ref.parent(), NodeId::HEADER);
        assert_eq!(four_ref.left(), Some(two));
        let two_ref = tree.node(two).unwrap();
        assert_eq!(two_ref.parent(), four);
        assert_eq!(two_ref.right(), Some(three));
        assert_eq!(tree.node(three).unwrap().parent(), two);
        assert_eq!(values(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotations_are_inverse() {
        let mut tree = right_leaning();
        let two = tree.find(&2, None).found().unwrap();
        let four = tree.find(&4, None).found().unwrap();

        tree.rotate_left(two);
        tree.rotate_right(four);

        assert_eq!(tree.root(), Some(two));
        assert_eq!(tree.node(two).unwrap().right(), Some(four));
        assert_eq!(values(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotating_below_the_root_keeps_the_parent_link() {
        let mut tree = right_leaning();
        let two = tree.find(&2, None).found().unwrap();
        let three = tree.find(&3, None).found().unwrap();
        let four = tree.find(&4, None).found().unwrap();

        tree.rotate_right(four);

        assert_eq!(tree.node(two).unwrap().right(), Some(three));
        assert_eq!(tree.node(three).unwrap().parent(), two);
        assert_eq!(tree.node(three).unwrap().right(), Some(four));
        assert_eq!(values(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "has no right child")]
    fn rotating_without_a_pivot_panics() {
        let mut tree = right_leaning();
        let one = tree.find(&1, None).found().unwrap();
        tree.rotate_left(one);
    }
}
