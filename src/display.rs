//! Text rendering of a heap's forest.
//!
//! [`FibonacciHeap::display`] returns an adapter whose [`fmt::Display`]
//! renders a summary line followed by one line per node, children indented
//! three spaces under their parent. The traversal uses an explicit worklist,
//! so arbitrarily deep trees render without recursion.

use std::fmt;

use crate::arena::NodeId;
use crate::fibonacci::FibonacciHeap;

impl<E, C> FibonacciHeap<E, C> {
    /// Returns an adapter rendering the heap's forest as text.
    ///
    /// Roots appear in ring order starting at the minimum; each node's
    /// children follow it, indented one level deeper.
    ///
    /// ```rust
    /// use fibonacci_heap::FibonacciHeap;
    ///
    /// let mut heap = FibonacciHeap::new();
    /// heap.insert_all(vec![2, 5]);
    /// assert_eq!(
    ///     heap.display().to_string(),
    ///     "* HEAP * 2 entries * 2 minimum *\n-> ELEMENT: 2\n-> ELEMENT: 5"
    /// );
    /// ```
    pub fn display(&self) -> HeapDisplay<'_, E, C> {
        HeapDisplay { heap: self }
    }
}

/// Borrowing adapter implementing [`fmt::Display`] for a heap's forest.
pub struct HeapDisplay<'a, E, C> {
    heap: &'a FibonacciHeap<E, C>,
}

impl<E: fmt::Display, C> fmt::Display for HeapDisplay<'_, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heap = self.heap;
        match heap.arena.get(heap.min) {
            Some(min) => write!(f, "* HEAP * {} entries * {} minimum *", heap.len, min.element)?,
            None => write!(f, "* HEAP * 0 entries * - minimum *")?,
        }

        // Siblings are pushed in reverse so each ring renders left to right.
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        push_ring(heap, &mut stack, heap.min, 0);
        while let Some((node, depth)) = stack.pop() {
            writeln!(f)?;
            write!(
                f,
                "{:width$}-> ELEMENT: {}",
                "",
                heap.arena[node].element,
                width = depth * 3
            )?;
            push_ring(heap, &mut stack, heap.arena[node].child, depth + 1);
        }
        Ok(())
    }
}

fn push_ring<E, C>(
    heap: &FibonacciHeap<E, C>,
    stack: &mut Vec<(NodeId, usize)>,
    start: NodeId,
    depth: usize,
) {
    let members: Vec<NodeId> = heap.arena.ring_iter(start).collect();
    for &node in members.iter().rev() {
        stack.push((node, depth));
    }
}

#[cfg(test)]
mod tests {
    use crate::{FibonacciHeap, MergeableHeap};

    #[test]
    fn empty_heap_renders_summary_only() {
        let heap: FibonacciHeap<i32> = FibonacciHeap::new();
        assert_eq!(heap.display().to_string(), "* HEAP * 0 entries * - minimum *");
    }

    #[test]
    fn singleton_renders_one_line() {
        let mut heap = FibonacciHeap::new();
        heap.insert(7);
        assert_eq!(
            heap.display().to_string(),
            "* HEAP * 1 entries * 7 minimum *\n-> ELEMENT: 7"
        );
    }

    #[test]
    fn roots_render_in_ring_order_from_minimum() {
        let mut heap = FibonacciHeap::new();
        heap.insert(5);
        heap.insert(2);
        assert_eq!(
            heap.display().to_string(),
            "* HEAP * 2 entries * 2 minimum *\n-> ELEMENT: 2\n-> ELEMENT: 5"
        );
    }

    #[test]
    fn children_indent_under_their_parent() {
        let mut heap = FibonacciHeap::new();
        heap.insert_all(vec![1, 2, 3, 4]);
        heap.delete_min();
        assert_eq!(
            heap.display().to_string(),
            "* HEAP * 3 entries * 2 minimum *\n\
             -> ELEMENT: 2\n\
             -> ELEMENT: 3\n   \
             -> ELEMENT: 4"
        );
    }

    #[test]
    fn grandchildren_indent_twice() {
        let mut heap = FibonacciHeap::new();
        heap.insert_all(1..=8);
        heap.delete_min();
        assert_eq!(
            heap.display().to_string(),
            "* HEAP * 7 entries * 2 minimum *\n\
             -> ELEMENT: 2\n\
             -> ELEMENT: 5\n   \
             -> ELEMENT: 6\n   \
             -> ELEMENT: 7\n      \
             -> ELEMENT: 8\n\
             -> ELEMENT: 3\n   \
             -> ELEMENT: 4"
        );
    }
}
