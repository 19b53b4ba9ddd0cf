use std::mem;

use crate::{Node, NodeId};

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next: Option<usize> },
}

/// Storage for the nodes of a single tree.
///
/// Released slots are threaded onto a free list and reused by later
/// allocations. Any access through a handle that does not refer to a live
/// node (including [`NodeId::HEADER`]) is a programming error and panics.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    /// The number of live nodes.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    pub(crate) fn allocate(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;

        match self.free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(node));
                match slot {
                    Slot::Vacant { next } => self.free = next,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of the arena, handing ownership of its value back
    /// to the caller.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        if self.get(id).is_none() {
            panic!("{id} does not refer to a live node");
        }

        let slot = mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant { next: self.free },
        );
        self.free = Some(id.index());
        self.occupied -= 1;

        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("slot was checked to be occupied"),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("{id} does not refer to a live node"),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("{id} does not refer to a live node"),
        }
    }

    /// Exchanges the values held by two live nodes, leaving their links and
    /// colors in place.
    pub(crate) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if self.get(a).is_none() || self.get(b).is_none() {
            panic!("cannot swap values between {a} and {b}: both must be live nodes");
        }
        if a == b {
            return;
        }

        let (low, high) = (a.index().min(b.index()), a.index().max(b.index()));
        let (head, tail) = self.slots.split_at_mut(high);

        if let (Slot::Occupied(low), Slot::Occupied(high)) = (&mut head[low], &mut tail[0]) {
            mem::swap(&mut low.value, &mut high.value);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }
}
