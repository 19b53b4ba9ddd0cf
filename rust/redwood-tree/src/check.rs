use crate::{NodeId, RedwoodTreeError, Side, Tree};

impl<T: Ord> Tree<T> {
    /// Verifies every structural invariant of the tree: value order, color
    /// rules, parent links and the recorded size.
    ///
    /// Returns the black height (root excluded, the absent leaf included) on
    /// success; an empty tree has a black height of 0.
    pub fn validate(&self) -> Result<usize, RedwoodTreeError> {
        let Some(root) = self.root() else {
            return match self.len {
                0 => Ok(0),
                expected => Err(RedwoodTreeError::CountMismatch { expected, found: 0 }),
            };
        };

        if !self.parent_of(root).is_header() {
            return Err(RedwoodTreeError::BrokenLink(root));
        }
        if self.color_of(root).is_red() {
            return Err(RedwoodTreeError::RedRoot(root));
        }

        let mut black_height = None;
        let mut reachable = 0;
        let mut pending = vec![(root, 0)];

        while let Some((id, above)) = pending.pop() {
            reachable += 1;
            let node = self.nodes.node(id);
            let blacks = if id != root && node.color.is_black() {
                above + 1
            } else {
                above
            };

            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    let found = blacks + 1;
                    match black_height {
                        None => black_height = Some(found),
                        Some(expected) if expected != found => {
                            return Err(RedwoodTreeError::BlackHeight {
                                node: id,
                                expected,
                                found,
                            });
                        }
                        Some(_) => (),
                    }
                    continue;
                };

                let child_node = self.nodes.node(child);
                if child_node.parent != id {
                    return Err(RedwoodTreeError::BrokenLink(child));
                }
                if node.color.is_red() && child_node.color.is_red() {
                    return Err(RedwoodTreeError::RedChild(id));
                }
                pending.push((child, blacks));
            }
        }

        if reachable != self.len {
            return Err(RedwoodTreeError::CountMismatch {
                expected: self.len,
                found: reachable,
            });
        }
        // Detached nodes still held by the arena
        if self.nodes.occupied() != self.len {
            return Err(RedwoodTreeError::CountMismatch {
                expected: self.len,
                found: self.nodes.occupied(),
            });
        }

        self.check_order()?;

        Ok(black_height.unwrap_or(0))
    }

    /// Checks that in-order values are strictly increasing.
    pub(crate) fn check_order(&self) -> Result<(), RedwoodTreeError> {
        let mut previous: Option<&T> = None;
        let mut node = self.next_node(NodeId::HEADER);
        while !node.is_header() {
            let value = &self.nodes.node(node).value;
            if previous.is_some_and(|previous| previous >= value) {
                return Err(RedwoodTreeError::Unordered(node));
            }
            previous = Some(value);
            node = self.next_node(node);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, RedwoodTreeError, Tree, TreeBuilder};

    #[test]
    fn empty_tree_is_valid() {
        assert_eq!(Tree::<u32>::new().validate(), Ok(0));
    }

    #[test]
    fn lone_black_root_has_black_height_one() {
        let tree: Tree<u32> = [1].into_iter().collect();
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn red_red_is_reported() {
        let mut builder = TreeBuilder::new();
        builder.node(3, Color::Black).unwrap();
        let two = builder.node(2, Color::Red).unwrap();
        builder.node(1, Color::Red).unwrap();
        for _ in 0..4 {
            builder.null().unwrap();
        }
        let tree = builder.finish().unwrap();
        assert_eq!(tree.validate(), Err(RedwoodTreeError::RedChild(two)));
    }

    #[test]
    fn uneven_black_height_is_reported() {
        let mut builder = TreeBuilder::new();
        builder.node(2, Color::Black).unwrap();
        builder.node(1, Color::Black).unwrap();
        builder.null().unwrap();
        builder.null().unwrap();
        builder.null().unwrap();
        let tree = builder.finish().unwrap();
        assert!(matches!(
            tree.validate(),
            Err(RedwoodTreeError::BlackHeight { .. })
        ));
    }
}
