//! Priority queue of `(priority, item)` pairs
//!
//! [`PriorityQueue`] keeps the ordering key apart from the payload, so items
//! need no ordering of their own. It is a thin layer over
//! [`BinaryHeap`] with a [`ByPriority`] order.
//!
//! # Example
//!
//! ```rust
//! use order_heap::PriorityQueue;
//!
//! // An event schedule: earliest timestamp first
//! let mut events: PriorityQueue<u64, &str> = PriorityQueue::new();
//! events.push(30, "flush");
//! events.push(10, "open");
//! events.push(20, "write");
//!
//! assert_eq!(events.peek(), Ok((&10, &"open")));
//! assert_eq!(events.pop(), Ok((10, "open")));
//! assert_eq!(events.pop(), Ok((20, "write")));
//! assert_eq!(events.len(), 1);
//! ```

use std::fmt;

use crate::binary::BinaryHeap;
use crate::order::{ByPriority, MinOrder, Order};
use crate::traits::{Heap, HeapError};

/// Queue that returns the item whose priority is closest to the root under `O`
///
/// Items pushed with equal priorities come out in an unspecified order.
pub struct PriorityQueue<P, I, O = MinOrder> {
    heap: BinaryHeap<(P, I), ByPriority<O>>,
}

impl<P, I, O: Default> PriorityQueue<P, I, O> {
    /// Creates an empty queue using the default value of `O`
    pub fn new() -> Self {
        Self::with_order(O::default())
    }
}

impl<P, I, O> PriorityQueue<P, I, O> {
    /// Creates an empty queue ordering priorities by `order`
    pub fn with_order(order: O) -> Self {
        Self {
            heap: BinaryHeap::with_order(ByPriority(order)),
        }
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.heap.size()
    }

    /// Returns true if no items are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns the first priority and its item without removing them
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue is empty.
    pub fn peek(&self) -> Result<(&P, &I), HeapError> {
        self.heap.peek_root().map(|(priority, item)| (priority, item))
    }
}

impl<P, I, O: Order<P>> PriorityQueue<P, I, O> {
    /// Queues `item` with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, priority: P, item: I) {
        self.heap.insert((priority, item));
    }

    /// Removes and returns the first priority and its item
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Result<(P, I), HeapError> {
        self.heap.extract_root()
    }

    /// Consumes the queue, returning all pairs in pop order
    pub fn into_sorted_vec(self) -> Vec<(P, I)> {
        self.heap.into_sorted_vec()
    }
}

impl<P, I, O: Order<P>> Heap<(P, I)> for PriorityQueue<P, I, O> {
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn insert(&mut self, (priority, item): (P, I)) {
        self.push(priority, item);
    }

    fn peek_root(&self) -> Result<&(P, I), HeapError> {
        self.heap.peek_root()
    }

    fn extract_root(&mut self) -> Result<(P, I), HeapError> {
        self.pop()
    }
}

impl<P, I, O: Default> Default for PriorityQueue<P, I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone, I: Clone, O: Clone> Clone for PriorityQueue<P, I, O> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<P: fmt::Debug, I: fmt::Debug, O> fmt::Debug for PriorityQueue<P, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("entries", &self.heap.as_slice())
            .finish_non_exhaustive()
    }
}

impl<P, I, O: Order<P>> Extend<(P, I)> for PriorityQueue<P, I, O> {
    fn extend<It: IntoIterator<Item = (P, I)>>(&mut self, iter: It) {
        self.heap.extend(iter);
    }
}

impl<P, I, O: Order<P> + Default> FromIterator<(P, I)> for PriorityQueue<P, I, O> {
    fn from_iter<It: IntoIterator<Item = (P, I)>>(iter: It) -> Self {
        Self {
            heap: BinaryHeap::build(iter, ByPriority(O::default())),
        }
    }
}
