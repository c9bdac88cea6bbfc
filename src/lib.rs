//! Fibonacci heap: a mergeable priority queue with amortized O(1) insert,
//! union, and decrease-key, and O(log n) amortized delete-min and delete.
//!
//! The heap orders elements by an injected [`Comparator`] (defaulting to the
//! natural order of `E: Ord`) and hands back a [`NodeHandle`] for every
//! inserted element, through which that element can later be decreased or
//! deleted in place. Two heaps over the same order unite into one.
//!
//! # Example
//!
//! ```rust
//! use fibonacci_heap::{FibonacciHeap, MergeableHeap};
//!
//! let mut tasks = FibonacciHeap::new();
//! let urgent = tasks.insert(40);
//! tasks.insert(10);
//! tasks.insert(25);
//!
//! // A priority turned out to be more urgent than first thought.
//! tasks.decrease_key(&urgent, 5).unwrap();
//!
//! assert_eq!(tasks.delete_min(), Some(5));
//! assert_eq!(tasks.delete_min(), Some(10));
//!
//! // Heaps merge in one root-list splice.
//! let mut more = FibonacciHeap::new();
//! more.insert(1);
//! tasks.union(more);
//! assert_eq!(tasks.peek(), Some(&1));
//! ```
//!
//! Node storage lives in a generational arena, so handles are plain copyable
//! ids: a stale handle (its node already removed, or minted by a different
//! heap) is reported as [`HeapError::StaleHandle`] instead of reaching an
//! unrelated node.

mod arena;
pub mod display;
pub mod fibonacci;
pub mod traits;

pub use display::HeapDisplay;
pub use fibonacci::{FibonacciHeap, Iter, NodeHandle};
pub use traits::{Comparator, Handle, HeapError, MergeableHeap, NaturalOrder};
