//! Node storage for the heap.
//!
//! Nodes live in a [`SlotMap`] and point at each other through generational
//! [`NodeId`] keys instead of references, so the sibling rings and parent and
//! child links form arbitrary cycles without any ownership cycles. A freed
//! slot bumps its generation, which makes every outstanding id for that node
//! fail to resolve instead of aliasing whatever reuses the slot.
//!
//! Siblings form circular doubly-linked rings. The ring primitives here only
//! rewrite `left`/`right` fields; tree structure (`parent`, `child`, `degree`,
//! `marked`) belongs to the heap algorithms.

use slotmap::{new_key_type, Key, SecondaryMap, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Generational key naming one node. `NodeId::null()` encodes "no link".
    pub(crate) struct NodeId;
}

/// One heap node: the element plus its position in the node forest.
pub(crate) struct Node<E> {
    pub(crate) element: E,
    /// Number of children directly below this node
    pub(crate) degree: usize,
    /// Set when this node has lost a child since it last became a child
    /// itself; meaningless while the node is a root
    pub(crate) marked: bool,
    pub(crate) parent: NodeId,
    /// Any one node of the child ring, null when degree is 0
    pub(crate) child: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

/// Arena owning every node of one heap.
pub(crate) struct NodeArena<E> {
    nodes: SlotMap<NodeId, Node<E>>,
}

impl<E> NodeArena<E> {
    pub(crate) fn new() -> Self {
        NodeArena {
            nodes: SlotMap::with_key(),
        }
    }

    /// Allocates a fresh unmarked, parentless, childless node forming a
    /// singleton ring with itself.
    pub(crate) fn alloc(&mut self, element: E) -> NodeId {
        self.nodes.insert_with_key(|id| Node {
            element,
            degree: 0,
            marked: false,
            parent: NodeId::null(),
            child: NodeId::null(),
            left: id,
            right: id,
        })
    }

    /// Releases the node's slot, returning the node. Outstanding ids for it
    /// stop resolving.
    pub(crate) fn free(&mut self, id: NodeId) -> Option<Node<E>> {
        self.nodes.remove(id)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<E>> {
        self.nodes.get(id)
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates over the elements of all live nodes, in slot order.
    pub(crate) fn elements(&self) -> slotmap::basic::Values<'_, NodeId, Node<E>> {
        self.nodes.values()
    }

    /// Resets `id` to a singleton ring, discarding its current links.
    pub(crate) fn make_ring(&mut self, id: NodeId) {
        let node = &mut self.nodes[id];
        node.left = id;
        node.right = id;
    }

    /// Splices `id` into a ring immediately to the right of `at`,
    /// overwriting both of `id`'s links.
    pub(crate) fn ring_insert_after(&mut self, at: NodeId, id: NodeId) {
        let succ = self.nodes[at].right;
        {
            let node = &mut self.nodes[id];
            node.left = at;
            node.right = succ;
        }
        self.nodes[at].right = id;
        self.nodes[succ].left = id;
    }

    /// Removes `id` from its ring, leaving it as a singleton ring. On a
    /// singleton this is a no-op.
    pub(crate) fn ring_unlink(&mut self, id: NodeId) {
        let (left, right) = {
            let node = &self.nodes[id];
            (node.left, node.right)
        };
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.make_ring(id);
    }

    /// Concatenates the rings containing `a` and `b` into one ring with four
    /// link rewrites. Both rings keep their cyclic order. `a` and `b` must
    /// belong to different rings.
    pub(crate) fn ring_splice(&mut self, a: NodeId, b: NodeId) {
        let a_prev = self.nodes[a].left;
        let b_prev = self.nodes[b].left;
        self.nodes[a_prev].right = b;
        self.nodes[b].left = a_prev;
        self.nodes[b_prev].right = a;
        self.nodes[a].left = b_prev;
    }

    /// Walks the ring containing `start` once, starting at `start` and
    /// following `right` links. Yields nothing when `start` is null.
    pub(crate) fn ring_iter(&self, start: NodeId) -> RingIter<'_, E> {
        RingIter {
            arena: self,
            start,
            next: start,
            done: start.is_null(),
        }
    }

    /// Moves every node of `other` into this arena, preserving links, and
    /// returns the translation from old ids to new ones. Costs one pass over
    /// `other`'s nodes.
    pub(crate) fn adopt(&mut self, mut other: NodeArena<E>) -> SecondaryMap<NodeId, NodeId> {
        let mut remap = SecondaryMap::with_capacity(other.nodes.len());
        for (old, node) in other.nodes.drain() {
            remap.insert(old, self.nodes.insert(node));
        }
        for &new in remap.values() {
            let (parent, child, left, right) = {
                let node = &self.nodes[new];
                (node.parent, node.child, node.left, node.right)
            };
            let node = &mut self.nodes[new];
            node.parent = translate(&remap, parent);
            node.child = translate(&remap, child);
            node.left = translate(&remap, left);
            node.right = translate(&remap, right);
        }
        remap
    }
}

fn translate(remap: &SecondaryMap<NodeId, NodeId>, id: NodeId) -> NodeId {
    if id.is_null() {
        NodeId::null()
    } else {
        remap[id]
    }
}

impl<E> Index<NodeId> for NodeArena<E> {
    type Output = Node<E>;

    fn index(&self, id: NodeId) -> &Node<E> {
        &self.nodes[id]
    }
}

impl<E> IndexMut<NodeId> for NodeArena<E> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<E> {
        &mut self.nodes[id]
    }
}

pub(crate) struct RingIter<'a, E> {
    arena: &'a NodeArena<E>,
    start: NodeId,
    next: NodeId,
    done: bool,
}

impl<E> Iterator for RingIter<'_, E> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.done {
            return None;
        }
        let current = self.next;
        self.next = self.arena[current].right;
        if self.next == self.start {
            self.done = true;
        }
        Some(current)
    }
}
