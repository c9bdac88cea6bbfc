//! Fibonacci heap implementation.
//!
//! A Fibonacci heap is a collection of heap-ordered trees whose roots sit on
//! a circular doubly-linked list, with a pointer to the root holding the
//! minimum. The structure is lazy: insert, union, and decrease-key only
//! splice rings, and the deferred tidying runs inside delete-min's
//! consolidation step.
//!
//! | Operation      | Amortized |
//! |----------------|-----------|
//! | `insert`       | O(1)      |
//! | `minimum`      | O(1)      |
//! | `union`        | O(1)*     |
//! | `decrease_key` | O(1)      |
//! | `delete_min`   | O(log n)  |
//! | `delete`       | O(log n)  |
//!
//! *The root-list splice is O(1); uniting the node storage of two non-empty
//! heaps additionally moves the consumed heap's nodes, one pass over them.
//!
//! Reference: Fredman and Tarjan, "Fibonacci heaps and their uses in
//! improved network optimization algorithms", JACM 34(3), 1987.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use slotmap::Key;

use crate::arena::{Node, NodeArena, NodeId};
use crate::traits::{Comparator, Handle, HeapError, MergeableHeap, NaturalOrder};

/// Identity of one heap instance, carried inside its handles so a handle
/// presented to the wrong heap is rejected instead of resolving to an
/// unrelated node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct HeapId(u64);

fn next_heap_id() -> HeapId {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    HeapId(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
}

/// Handle to one node of a [`FibonacciHeap`].
///
/// Returned by `insert` and `minimum`, passed back to `decrease_key` and
/// `delete`. A handle stays valid until its node is removed; presenting it
/// afterwards, or to a heap that did not mint it, yields
/// [`HeapError::StaleHandle`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeHandle {
    heap: HeapId,
    node: NodeId,
}

impl Handle for NodeHandle {}

/// A mergeable min-heap with amortized O(1) insert, union, and decrease-key.
///
/// Elements are ordered by the injected [`Comparator`], which defaults to
/// the natural order of `E: Ord`. The element itself is the key; decreasing
/// a key means overwriting the element with one that compares less than or
/// equal to it.
///
/// # Example
///
/// ```rust
/// use fibonacci_heap::{FibonacciHeap, MergeableHeap};
///
/// let mut heap = FibonacciHeap::new();
/// heap.insert(4);
/// let node = heap.insert(9);
/// heap.insert(2);
///
/// assert_eq!(heap.peek(), Some(&2));
/// heap.decrease_key(&node, 1).unwrap();
/// assert_eq!(heap.delete_min(), Some(1));
/// assert_eq!(heap.delete_min(), Some(2));
/// assert_eq!(heap.delete_min(), Some(4));
/// ```
pub struct FibonacciHeap<E, C = NaturalOrder> {
    pub(crate) arena: NodeArena<E>,
    /// Root holding the minimum element, null when the heap is empty
    pub(crate) min: NodeId,
    pub(crate) len: usize,
    id: HeapId,
    cmp: C,
}

impl<E: Ord> FibonacciHeap<E> {
    /// Creates an empty heap using the natural order of `E`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<E: Ord> Default for FibonacciHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C: Comparator<E>> FibonacciHeap<E, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        FibonacciHeap {
            arena: NodeArena::new(),
            min: NodeId::null(),
            len: 0,
            id: next_heap_id(),
            cmp,
        }
    }

    /// Inserts every element of `elements`, returning their handles in order.
    pub fn insert_all<I>(&mut self, elements: I) -> Vec<NodeHandle>
    where
        I: IntoIterator<Item = E>,
    {
        elements.into_iter().map(|e| self.insert(e)).collect()
    }

    /// Returns a reference to the minimum element without removing it.
    pub fn peek(&self) -> Option<&E> {
        self.arena.get(self.min).map(|node| &node.element)
    }

    /// Returns the element of the node named by `handle`, if the node is
    /// live in this heap.
    pub fn get(&self, handle: &NodeHandle) -> Option<&E> {
        if handle.heap != self.id {
            return None;
        }
        self.arena.get(handle.node).map(|node| &node.element)
    }

    /// Iterates over all elements, in unspecified order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.arena.elements(),
        }
    }

    fn handle(&self, node: NodeId) -> NodeHandle {
        NodeHandle {
            heap: self.id,
            node,
        }
    }

    fn resolve(&self, handle: &NodeHandle) -> Result<NodeId, HeapError> {
        if handle.heap == self.id && self.arena.contains(handle.node) {
            Ok(handle.node)
        } else {
            Err(HeapError::StaleHandle)
        }
    }

    fn less(&self, a: NodeId, b: NodeId) -> bool {
        self.cmp
            .compare(&self.arena[a].element, &self.arena[b].element)
            == Ordering::Less
    }

    /// Removes the node `min` points at and returns its element. `min` must
    /// be non-null; the true minimum is re-derived during consolidation.
    fn pop_min(&mut self) -> E {
        let min = self.min;

        // Promote the children of the outgoing minimum into the root list.
        let mut child = self.arena[min].child;
        let mut remaining = self.arena[min].degree;
        while remaining > 0 {
            let next = self.arena[child].right;
            self.arena.ring_unlink(child);
            self.arena.ring_insert_after(min, child);
            self.arena[child].parent = NodeId::null();
            child = next;
            remaining -= 1;
        }

        let succ = self.arena[min].right;
        self.arena.ring_unlink(min);
        if succ == min {
            self.min = NodeId::null();
        } else {
            self.min = succ;
            self.consolidate();
        }
        self.len -= 1;
        self.arena.free(min).expect("min points at a live node").element
    }

    /// Merges roots of equal degree until every degree occurs at most once,
    /// then rebuilds the root list from the survivors and re-aims `min`.
    fn consolidate(&mut self) {
        // No tree in a heap of n nodes has root degree above log_phi(n),
        // phi the golden ratio.
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let buckets = ((self.len as f64).ln() / phi.ln()).floor() as usize + 1;
        let mut by_degree: Vec<NodeId> = vec![NodeId::null(); buckets];

        let roots: Vec<NodeId> = self.arena.ring_iter(self.min).collect();
        for root in roots {
            let mut x = root;
            let mut d = self.arena[x].degree;
            loop {
                let y = by_degree[d];
                if y.is_null() {
                    break;
                }
                // Equal degrees: the larger root goes under the smaller.
                let (parent, child) = if self.less(y, x) { (y, x) } else { (x, y) };
                self.link(child, parent);
                by_degree[d] = NodeId::null();
                x = parent;
                d += 1;
            }
            by_degree[d] = x;
        }

        self.min = NodeId::null();
        for root in by_degree {
            if root.is_null() {
                continue;
            }
            if self.min.is_null() {
                self.arena.make_ring(root);
                self.min = root;
            } else {
                self.arena.ring_insert_after(self.min, root);
                if self.less(root, self.min) {
                    self.min = root;
                }
            }
        }
    }

    /// Removes `child` from the root list and attaches it under `parent`.
    fn link(&mut self, child: NodeId, parent: NodeId) {
        self.arena.ring_unlink(child);
        let first = self.arena[parent].child;
        if first.is_null() {
            self.arena[parent].child = child;
        } else {
            self.arena.ring_insert_after(first, child);
        }
        self.arena[parent].degree += 1;
        let node = &mut self.arena[child];
        node.parent = parent;
        node.marked = false;
    }

    /// Detaches `child` from `parent` and reattaches it as an unmarked root.
    fn cut(&mut self, child: NodeId, parent: NodeId) {
        let succ = self.arena[child].right;
        self.arena.ring_unlink(child);
        self.arena[parent].degree -= 1;
        if self.arena[parent].child == child {
            self.arena[parent].child = succ;
        }
        if self.arena[parent].degree == 0 {
            self.arena[parent].child = NodeId::null();
        }
        self.arena.ring_insert_after(self.min, child);
        let node = &mut self.arena[child];
        node.parent = NodeId::null();
        node.marked = false;
    }

    /// Walks up from a node that just lost a child: an unmarked ancestor is
    /// marked and the walk stops; a marked one is cut as well and the walk
    /// continues, so no node loses two children while it is itself a child.
    fn cascading_cut(&mut self, mut node: NodeId) {
        loop {
            let parent = self.arena[node].parent;
            if parent.is_null() {
                return;
            }
            if !self.arena[node].marked {
                self.arena[node].marked = true;
                return;
            }
            self.cut(node, parent);
            node = parent;
        }
    }
}

impl<E, C: Comparator<E>> MergeableHeap<E> for FibonacciHeap<E, C> {
    type Handle = NodeHandle;

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        self.arena.clear();
        self.min = NodeId::null();
        self.len = 0;
    }

    fn insert(&mut self, element: E) -> NodeHandle {
        let node = self.arena.alloc(element);
        if self.min.is_null() {
            self.min = node;
        } else {
            self.arena.ring_insert_after(self.min, node);
            if self.less(node, self.min) {
                self.min = node;
            }
        }
        self.len += 1;
        self.handle(node)
    }

    /// Unites `other` into this heap.
    ///
    /// The root lists are joined by a four-link splice. Bringing `other`'s
    /// nodes into this heap's storage costs one pass over them, except when
    /// this heap is empty and takes over `other`'s storage as a whole (in
    /// that case `other`'s handles keep working).
    fn union(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.arena = other.arena;
            self.min = other.min;
            self.len = other.len;
            self.id = other.id;
            return;
        }
        let other_len = other.len;
        let remap = self.arena.adopt(other.arena);
        let other_min = remap[other.min];
        self.arena.ring_splice(self.min, other_min);
        if self.less(other_min, self.min) {
            self.min = other_min;
        }
        self.len += other_len;
    }

    fn minimum(&self) -> Option<NodeHandle> {
        if self.min.is_null() {
            None
        } else {
            Some(self.handle(self.min))
        }
    }

    fn delete_min(&mut self) -> Option<E> {
        if self.min.is_null() {
            return None;
        }
        Some(self.pop_min())
    }

    fn delete(&mut self, handle: &NodeHandle) -> Result<E, HeapError> {
        let node = self.resolve(handle)?;
        let parent = self.arena[node].parent;
        if !parent.is_null() {
            self.cut(node, parent);
            self.cascading_cut(parent);
        }
        // The node is now a root; make it the extraction point regardless of
        // its element. Consolidation re-derives the true minimum.
        self.min = node;
        Ok(self.pop_min())
    }

    fn decrease_key(&mut self, handle: &NodeHandle, element: E) -> Result<(), HeapError> {
        let node = self.resolve(handle)?;
        if self.cmp.compare(&self.arena[node].element, &element) == Ordering::Less {
            return Err(HeapError::KeyNotDecreased);
        }
        self.arena[node].element = element;
        let parent = self.arena[node].parent;
        if !parent.is_null() && self.less(node, parent) {
            self.cut(node, parent);
            self.cascading_cut(parent);
        }
        if self.less(node, self.min) {
            self.min = node;
        }
        Ok(())
    }
}

/// Iterator over the elements of a [`FibonacciHeap`], in unspecified order.
pub struct Iter<'a, E> {
    inner: slotmap::basic::Values<'a, NodeId, Node<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        self.inner.next().map(|node| &node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

#[cfg(test)]
impl<E, C: Comparator<E>> FibonacciHeap<E, C> {
    /// Validates the whole structure: ring link symmetry, parent and degree
    /// bookkeeping, heap order along every edge, a minimal `min`, and
    /// agreement between `len`, the arena, and what the root list reaches.
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        if self.min.is_null() {
            assert_eq!(self.len, 0);
            assert_eq!(self.iter().len(), 0);
            return;
        }
        assert!(self.arena.contains(self.min));

        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut stack: Vec<NodeId> = Vec::new();
        for root in self.arena.ring_iter(self.min) {
            assert!(self.arena[root].parent.is_null(), "root with a parent");
            assert!(!self.less(root, self.min), "min larger than a root");
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            assert!(seen.insert(node), "node reachable twice");
            let left = self.arena[node].left;
            let right = self.arena[node].right;
            assert_eq!(self.arena[left].right, node, "broken left link");
            assert_eq!(self.arena[right].left, node, "broken right link");

            let child = self.arena[node].child;
            if self.arena[node].degree == 0 {
                assert!(child.is_null(), "degree 0 with a child");
            } else {
                let members: Vec<NodeId> = self.arena.ring_iter(child).collect();
                assert_eq!(members.len(), self.arena[node].degree, "degree mismatch");
                for &c in &members {
                    assert_eq!(self.arena[c].parent, node, "child with wrong parent");
                    assert!(!self.less(c, node), "child smaller than parent");
                    stack.push(c);
                }
            }
        }
        assert_eq!(seen.len(), self.len, "unreachable or duplicated nodes");
        assert_eq!(self.iter().len(), self.len, "leaked arena slots");
    }
}
