//! Common trait and error type for the heaps in this crate
//!
//! [`Heap`] is the operation contract shared by [`BinaryHeap`](crate::BinaryHeap)
//! and [`PriorityQueue`](crate::PriorityQueue). Unlike `std::collections::BinaryHeap`,
//! empty access is reported through [`HeapError`] rather than `None`, so callers
//! handle the empty case explicitly at the call site.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HeapError {
    /// `peek_root` or `extract_root` was called on a heap with no elements.
    ///
    /// The heap is left untouched and remains usable.
    #[error("heap is empty")]
    EmptyHeap,
}

/// Base trait for array-backed priority structures
///
/// The element closest to the root under the heap's ordering is the "root".
/// For a min-heap that is the minimum, for a max-heap the maximum.
///
/// # Example
///
/// ```rust
/// use order_heap::{Heap, HeapError, MinHeap};
///
/// let mut heap = MinHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek_root(), Ok(&1));
/// assert_eq!(heap.extract_root(), Ok(1));
/// assert_eq!(heap.size(), 2);
///
/// heap.extract_root().unwrap();
/// heap.extract_root().unwrap();
/// assert_eq!(heap.extract_root(), Err(HeapError::EmptyHeap));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of live elements
    fn size(&self) -> usize;

    /// Inserts an element, restoring the heap property
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_root(&self) -> Result<&T, HeapError>;

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty. No mutation occurs.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_root(&mut self) -> Result<T, HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::EmptyHeap.to_string(), "heap is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        fn boxed() -> Result<(), Box<dyn std::error::Error>> {
            Err(HeapError::EmptyHeap)?
        }
        let err = boxed().unwrap_err();
        assert_eq!(err.to_string(), "heap is empty");
        assert_eq!(
            err.downcast_ref::<HeapError>(),
            Some(&HeapError::EmptyHeap)
        );
    }
}
