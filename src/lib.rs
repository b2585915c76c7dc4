//! Array-backed binary heaps with pluggable ordering
//!
//! This crate provides a single heap engine, [`BinaryHeap`], whose direction is
//! decided by an [`Order`] strategy injected at construction instead of by
//! separate min and max types.
//!
//! # Features
//!
//! - **BinaryHeap**: O(log n) insert and extract-root; O(1) peek; O(n) bulk build
//! - **Order strategies**: [`MinOrder`], [`MaxOrder`], [`Reversed`](order::Reversed),
//!   any `Fn(&T, &T) -> bool` closure, or a key extractor via [`order::by_key`]
//! - **PriorityQueue**: (priority, item) pairs on top of the same heap
//! - **Heapsort**: in-place, allocation-free slice sorting in [`sort`]
//!
//! Empty access is an explicit [`HeapError::EmptyHeap`], never a default value.
//!
//! # Example
//!
//! ```rust
//! use order_heap::{BinaryHeap, Heap, HeapError, MaxOrder, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! for x in [5, 3, 8, 1] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.peek_root(), Ok(&1));
//! let drained: Vec<_> = heap.drain_sorted().collect();
//! assert_eq!(drained, vec![1, 3, 5, 8]);
//! assert_eq!(heap.extract_root(), Err(HeapError::EmptyHeap));
//!
//! let max = BinaryHeap::build([13, -3, -25, 20], MaxOrder);
//! assert_eq!(max.peek_root(), Ok(&20));
//! ```
//!
//! # Concurrency
//!
//! Heaps carry no internal synchronization. Share one across threads by
//! wrapping it in a lock; every mutating call needs exclusive access.

pub mod binary;
pub mod index;
pub mod order;
pub mod priority_queue;
pub mod sift;
pub mod sort;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, DrainSorted, MaxHeap, MinHeap};
pub use order::{MaxOrder, MinOrder, Order};
pub use priority_queue::PriorityQueue;
pub use traits::{Heap, HeapError};
