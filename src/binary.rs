//! Array-backed binary heap with an injected ordering strategy
//!
//! [`BinaryHeap`] stores its elements in a single `Vec` laid out as a
//! complete binary tree (see [`index`](crate::index)). The [`Order`] given at
//! construction is the only thing that distinguishes a min-heap from a
//! max-heap or any custom priority; every operation funnels into the same
//! [`sift_down`] / [`sift_up`] procedures.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `extract_root`    | O(log n)   |
//! | `peek_root`       | O(1)       |
//! | `build`           | O(n)       |
//! | `into_sorted_vec` | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use order_heap::{BinaryHeap, MaxOrder, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! for x in [5, 3, 8, 1] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.peek_root(), Ok(&1));
//!
//! let max = BinaryHeap::build([13, -3, -25, 20], MaxOrder);
//! assert_eq!(max.peek_root(), Ok(&20));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::order::{MaxOrder, MinOrder, Order};
use crate::sift::{build, is_heap, sift_down, sift_up};
use crate::traits::{Heap, HeapError};

/// A binary heap ordered by `O`
///
/// `elements[0..size())` is the live heap; any spare capacity of the vector is
/// unused storage. The heap grows without bound.
pub struct BinaryHeap<T, O = MinOrder> {
    elements: Vec<T>,
    order: O,
}

/// Smallest element at the root
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// Largest element at the root
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

impl<T, O: Default> BinaryHeap<T, O> {
    /// Creates an empty heap using the default value of `O`
    ///
    /// Default type parameters do not drive inference, so name the order
    /// through an alias such as [`MinHeap`] or an annotation.
    pub fn new() -> Self {
        Self::with_order(O::default())
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Creates an empty heap ordered by `order`
    pub fn with_order(order: O) -> Self {
        Self {
            elements: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` elements before
    /// reallocating
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the number of live elements
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Releases unused backing storage
    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The ordering strategy this heap was built with
    pub fn order(&self) -> &O {
        &self.order
    }

    /// The live elements in heap (level) order, not sorted
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates over the live elements in heap order, not sorted
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the heap, returning its elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns the root element without removing it
    ///
    /// Repeated calls with no mutation in between return the same element.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn peek_root(&self) -> Result<&T, HeapError> {
        self.elements.first().ok_or(HeapError::EmptyHeap)
    }
}

impl<T, O: Order<T>> BinaryHeap<T, O> {
    /// Builds a heap from an arbitrary sequence in O(n)
    pub fn build<I>(items: I, order: O) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec_with_order(items.into_iter().collect(), order)
    }

    /// Builds a heap in place from an existing vector in O(n)
    ///
    /// The vector's allocation is reused as the heap's backing storage.
    pub fn from_vec_with_order(mut elements: Vec<T>, order: O) -> Self {
        build(&mut elements, &order);

        #[cfg(debug_assertions)]
        {
            if let Some(child) = crate::sift::first_violation(&elements, &order) {
                panic!(
                    "heap property violated after build: slot {} precedes its parent",
                    child
                );
            }
        }

        Self { elements, order }
    }

    /// Inserts an element
    ///
    /// The element is appended at the first free slot and sifted up while it
    /// precedes its parent.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let last = self.elements.len() - 1;
        let _rest = sift_up(&mut self.elements, last, &self.order);

        #[cfg(debug_assertions)]
        crate::sift::assert_settled(&self.elements, _rest, &self.order);
    }

    /// Removes and returns the root element
    ///
    /// The last element takes the root slot and is sifted down over the
    /// shrunken range.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty; the heap is not
    /// modified.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let root = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            let _rest = sift_down(&mut self.elements, 0, &self.order);

            #[cfg(debug_assertions)]
            crate::sift::assert_settled(&self.elements, _rest, &self.order);
        }

        Ok(root)
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// When `other` is at least as large as `self`, the combined vector is
    /// rebuilt in O(n + m); otherwise each element is inserted in
    /// O(m log(n + m)).
    pub fn append(&mut self, other: &mut Self) {
        if other.size() >= self.size() {
            self.elements.append(&mut other.elements);
            build(&mut self.elements, &self.order);
        } else {
            for value in other.elements.drain(..) {
                self.insert(value);
            }
        }
    }

    /// Returns an iterator that extracts elements in root-first order
    ///
    /// Elements the iterator does not reach stay in the heap.
    ///
    /// ```rust
    /// use order_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from(vec![4, 1, 3, 2]);
    /// let first_two: Vec<_> = heap.drain_sorted().take(2).collect();
    /// assert_eq!(first_two, vec![1, 2]);
    /// assert_eq!(heap.size(), 2);
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, returning its elements in extraction order
    ///
    /// Sorts in place, reusing the heap's storage: the root is repeatedly
    /// swapped past the end of the shrinking live range, which leaves the
    /// elements in reverse extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (1..self.elements.len()).rev() {
            self.elements.swap(0, end);
            sift_down(&mut self.elements[..end], 0, &self.order);
        }
        self.elements.reverse();
        self.elements
    }

    /// Checks the heap property over every live element
    ///
    /// This is O(n). Always true unless the order is not a strict weak
    /// ordering.
    pub fn is_valid(&self) -> bool {
        is_heap(&self.elements, &self.order)
    }
}

impl<T, O: Order<T>> Heap<T> for BinaryHeap<T, O> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn size(&self) -> usize {
        BinaryHeap::size(self)
    }

    fn insert(&mut self, value: T) {
        BinaryHeap::insert(self, value)
    }

    fn peek_root(&self) -> Result<&T, HeapError> {
        BinaryHeap::peek_root(self)
    }

    fn extract_root(&mut self) -> Result<T, HeapError> {
        BinaryHeap::extract_root(self)
    }
}

impl<T, O: Default> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O: Clone> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            order: self.order.clone(),
        }
    }
}

// Closures are not Debug, so the order is left out
impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<T, O: Order<T> + Default> From<Vec<T>> for BinaryHeap<T, O> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec_with_order(elements, O::default())
    }
}

impl<T, O: Order<T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter, O::default())
    }
}

impl<T, O: Order<T>> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator returned by [`BinaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, O: Order<T>> {
    heap: &'a mut BinaryHeap<T, O>,
}

impl<T, O: Order<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_root().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.size();
        (len, Some(len))
    }
}

impl<T, O: Order<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T, O: Order<T>> FusedIterator for DrainSorted<'_, T, O> {}
