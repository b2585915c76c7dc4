//! Ordering strategies
//!
//! A heap never compares elements directly. It asks an [`Order`] whether one
//! element should sit closer to the root than another, so the same heap code
//! serves min-heaps, max-heaps and any custom priority.
//!
//! Any `Fn(&T, &T) -> bool` closure is an [`Order`]:
//!
//! ```rust
//! use order_heap::{BinaryHeap, Heap};
//!
//! // Longest string first
//! let mut heap = BinaryHeap::with_order(|a: &&str, b: &&str| a.len() > b.len());
//! heap.insert("ab");
//! heap.insert("abcd");
//! heap.insert("a");
//! assert_eq!(heap.extract_root(), Ok("abcd"));
//! ```
//!
//! The predicate must be a strict weak ordering (irreflexive, transitive, with
//! transitive incomparability). This is not checked; a predicate such as
//! `a <= b` leaves the heap in an unspecified, though memory-safe, state.

use std::cmp::Ordering;

/// Decides which of two elements belongs closer to the root
pub trait Order<T: ?Sized> {
    /// Returns true iff `a` should be considered closer to the root than `b`
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Order<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element at the root (`a < b`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Order<T> for MinOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element at the root (`a > b`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Order<T> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Inverts another order: whatever `O` puts last comes first
///
/// ```rust
/// use order_heap::order::{MinOrder, Order, Reversed};
///
/// let max = Reversed(MinOrder);
/// assert!(max.precedes(&2, &1));
/// assert!(!max.precedes(&1, &1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: Order<T>> Order<T> for Reversed<O> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.0.precedes(b, a)
    }
}

/// Orders `(priority, item)` pairs by priority alone
///
/// Items never take part in comparisons, so they need no trait bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByPriority<O>(pub O);

impl<P, I, O: Order<P>> Order<(P, I)> for ByPriority<O> {
    #[inline]
    fn precedes(&self, a: &(P, I), b: &(P, I)) -> bool {
        self.0.precedes(&a.0, &b.0)
    }
}

/// Builds an ascending order over a key extracted from each element
///
/// ```rust
/// use order_heap::order::by_key;
/// use order_heap::{BinaryHeap, Heap};
///
/// let mut heap = BinaryHeap::with_order(by_key(|job: &(u32, &str)| job.0));
/// heap.insert((7, "compact"));
/// heap.insert((2, "flush"));
/// assert_eq!(heap.peek_root(), Ok(&(2, "flush")));
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> bool + Clone
where
    K: Ord,
    F: Fn(&T) -> K + Clone,
{
    move |a: &T, b: &T| key(a) < key(b)
}

/// Adapts a three-way comparator into an ascending [`Order`]
///
/// Elements that `compare` reports as [`Ordering::Less`] come first.
pub fn from_comparator<T, F>(compare: F) -> impl Fn(&T, &T) -> bool + Clone
where
    F: Fn(&T, &T) -> Ordering + Clone,
{
    move |a: &T, b: &T| compare(a, b) == Ordering::Less
}
