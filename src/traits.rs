//! Public contract for mergeable heaps.
//!
//! This module defines the three pieces every consumer of the crate touches:
//!
//! - [`MergeableHeap`]: the heap operation set (insert, union, minimum,
//!   delete-min, delete, decrease-key plus the trivial accessors)
//! - [`HeapError`]: the error taxonomy for handle-based operations
//! - [`Comparator`]: the injected total order a heap is constructed with
//!
//! Operations that accept a node handle report misuse through [`HeapError`]
//! instead of corrupting the heap: a handle that no longer resolves (its node
//! was removed, or it belongs to a different heap) is a
//! [`HeapError::StaleHandle`], and a decrease-key that would move an element
//! upward is a [`HeapError::KeyNotDecreased`].

use std::cmp::Ordering;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new element compares greater than the node's current element
    KeyNotDecreased,
    /// The handle does not refer to a live node of this heap (the node was
    /// removed, or the handle was minted by another heap)
    StaleHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyNotDecreased => {
                write!(f, "new element compares greater than the current element")
            }
            HeapError::StaleHandle => {
                write!(f, "handle does not refer to a live node of this heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for decrease-key and delete.
///
/// This is an opaque value identifying a specific node. Handles stay valid
/// while their node is in the heap; after the node is removed (by
/// [`MergeableHeap::delete`] or [`MergeableHeap::delete_min`]) the handle is
/// stale, and handle-based operations report [`HeapError::StaleHandle`].
pub trait Handle: Clone + PartialEq + Eq {}

/// Total order over `E`, injected into a heap at construction.
///
/// A heap compares elements exclusively through its comparator, so `E` itself
/// does not have to implement [`Ord`]. The order must be a consistent total
/// order for the whole lifetime of the heap (and of every heap united into
/// it); swapping orders mid-lifetime is unsupported.
///
/// Closures implement this trait directly:
///
/// ```rust
/// use fibonacci_heap::{FibonacciHeap, MergeableHeap};
///
/// // A max-heap over i32, by reversing the natural order.
/// let mut heap = FibonacciHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// heap.insert(3);
/// heap.insert(7);
/// heap.insert(5);
/// assert_eq!(heap.delete_min(), Some(7));
/// ```
pub trait Comparator<E> {
    /// Compares two elements, `Ordering::Less` meaning `a` is extracted first
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

/// The default comparator: the natural order of `E: Ord`
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<E: Ord> Comparator<E> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        a.cmp(b)
    }
}

impl<E, F> Comparator<E> for F
where
    F: Fn(&E, &E) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self(a, b)
    }
}

/// A mergeable min-heap: a priority queue that additionally supports uniting
/// two heaps and addressing individual nodes through handles.
///
/// The heap is a min-heap under its comparator; `minimum` and `delete_min`
/// operate on the smallest element. Handle-returning operations allow callers
/// to later decrease an element's key or delete it from the middle of the
/// heap.
///
/// # Example
///
/// ```rust
/// use fibonacci_heap::{FibonacciHeap, MergeableHeap};
///
/// let mut heap = FibonacciHeap::new();
/// let node = heap.insert(5);
/// heap.insert(3);
/// heap.decrease_key(&node, 1).unwrap();
/// assert_eq!(heap.delete_min(), Some(1));
/// assert_eq!(heap.delete_min(), Some(3));
/// assert_eq!(heap.delete_min(), None);
/// ```
pub trait MergeableHeap<E> {
    /// The handle type naming nodes of this heap
    type Handle: Handle;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Removes every element, releasing all node storage at once
    fn clear(&mut self);

    /// Inserts an element, returning a handle to its node
    ///
    /// # Time Complexity
    /// O(1)
    fn insert(&mut self, element: E) -> Self::Handle;

    /// Unites `other` into this heap, consuming it
    ///
    /// Both heaps must order their elements the same way. Handles minted by
    /// `other` are invalidated unless this heap was empty, in which case it
    /// takes over `other`'s nodes wholesale and their handles keep working.
    fn union(&mut self, other: Self);

    /// Returns a handle to the node holding the minimum element, without
    /// removing it, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(1)
    fn minimum(&self) -> Option<Self::Handle>;

    /// Removes the minimum element and returns it, or `None` if the heap is
    /// empty
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn delete_min(&mut self) -> Option<E>;

    /// Removes the node named by `handle` and returns its element
    ///
    /// Works on any node regardless of its position in the heap, without
    /// requiring a sentinel key.
    ///
    /// # Errors
    /// [`HeapError::StaleHandle`] if the handle does not resolve to a live
    /// node of this heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn delete(&mut self, handle: &Self::Handle) -> Result<E, HeapError>;

    /// Overwrites the element of the node named by `handle` with one that
    /// compares less than or equal to it
    ///
    /// # Errors
    /// - [`HeapError::KeyNotDecreased`] if `element` compares greater than
    ///   the node's current element; the heap is left untouched.
    /// - [`HeapError::StaleHandle`] if the handle does not resolve to a live
    ///   node of this heap.
    ///
    /// # Time Complexity
    /// O(1) amortized
    fn decrease_key(&mut self, handle: &Self::Handle, element: E) -> Result<(), HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            HeapError::KeyNotDecreased.to_string(),
            "new element compares greater than the current element"
        );
        assert_eq!(
            HeapError::StaleHandle.to_string(),
            "handle does not refer to a live node of this heap"
        );
    }

    #[test]
    fn natural_order_compares_like_ord() {
        let cmp = NaturalOrder;
        assert_eq!(cmp.compare(&1, &2), Ordering::Less);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
        assert_eq!(cmp.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn closures_are_comparators() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(reverse.compare(&2, &1), Ordering::Less);
    }
}
