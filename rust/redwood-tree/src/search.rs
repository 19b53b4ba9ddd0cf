use std::{borrow::Borrow, cmp::Ordering};

use crate::{NodeId, Side, Tree};

/// A vacant child link: where a value that was not found would be attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// The future parent. [`NodeId::HEADER`] when the tree is empty.
    pub parent: NodeId,
    /// The side of `parent` that is vacant.
    pub side: Side,
}

impl Position {
    /// The position of the root of an empty tree.
    pub const ROOT: Position = Position {
        parent: NodeId::HEADER,
        side: Side::Left,
    };
}

/// The outcome of [`Tree::find`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// The key compares equal to the value held by this node.
    Found(NodeId),
    /// The key is absent. It belongs at this position.
    Vacant(Position),
}

impl Lookup {
    /// How the key compares against the last node visited:
    /// [`Ordering::Equal`] if found, otherwise [`Ordering::Less`] or
    /// [`Ordering::Greater`] according to the vacant side.
    pub fn ordering(&self) -> Ordering {
        match self {
            Lookup::Found(_) => Ordering::Equal,
            Lookup::Vacant(Position {
                side: Side::Left, ..
            }) => Ordering::Less,
            Lookup::Vacant(Position {
                side: Side::Right, ..
            }) => Ordering::Greater,
        }
    }

    /// The last node visited by the search: the match, or the future parent.
    pub fn node(&self) -> NodeId {
        match self {
            Lookup::Found(id) => *id,
            Lookup::Vacant(position) => position.parent,
        }
    }

    /// The matching node, if the key was found.
    pub fn found(&self) -> Option<NodeId> {
        match self {
            Lookup::Found(id) => Some(*id),
            Lookup::Vacant(_) => None,
        }
    }

    /// The insertion position, if the key was not found.
    pub fn vacant(&self) -> Option<Position> {
        match self {
            Lookup::Found(_) => None,
            Lookup::Vacant(position) => Some(*position),
        }
    }
}

impl<T> Tree<T> {
    /// Searches for `key`, descending from `subtree` (or from the root when
    /// `subtree` is `None` or [`NodeId::HEADER`]).
    ///
    /// A failed search reports the vacant link where `key` belongs, which is
    /// exactly what [`Tree::insert`] expects. An empty tree reports
    /// [`Position::ROOT`].
    pub fn find<Q>(&self, key: &Q, subtree: Option<NodeId>) -> Lookup
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let start = match subtree {
            Some(id) if !id.is_header() => Some(id),
            _ => self.root(),
        };
        let Some(mut current) = start else {
            return Lookup::Vacant(Position::ROOT);
        };

        loop {
            let node = self.nodes.node(current);
            let side = match key.cmp(node.value.borrow()) {
                Ordering::Equal => return Lookup::Found(current),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(next) => current = next,
                None => {
                    return Lookup::Vacant(Position {
                        parent: current,
                        side,
                    });
                }
            }
        }
    }

    /// Retrieves the stored value equal to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key, None)
            .found()
            .map(|id| &self.nodes.node(id).value)
    }

    /// Returns `true` if a value equal to `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key, None).found().is_some()
    }
}
