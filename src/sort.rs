//! In-place heapsort
//!
//! The slice is turned into a heap under the *reversed* order, so the root is
//! the element that belongs last. Each round swaps the root just past the
//! shrinking live range and sifts the replacement down. No allocation, O(n log n)
//! worst case, not stable.
//!
//! ```rust
//! use order_heap::sort::{heap_sort, heap_sort_by, sort_by_order};
//! use order_heap::MaxOrder;
//!
//! let mut v = vec![5, 3, 8, 1];
//! heap_sort(&mut v);
//! assert_eq!(v, vec![1, 3, 5, 8]);
//!
//! sort_by_order(&mut v, MaxOrder);
//! assert_eq!(v, vec![8, 5, 3, 1]);
//!
//! let mut words = vec!["ccc", "a", "bb"];
//! heap_sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
//! assert_eq!(words, vec!["a", "bb", "ccc"]);
//! ```

use std::cmp::Ordering;

use crate::order::{from_comparator, MinOrder, Order, Reversed};
use crate::sift::{build, sift_down};

/// Sorts `elements` so they appear in the order a heap ordered by `order`
/// would extract them.
pub fn sort_by_order<T, O: Order<T>>(elements: &mut [T], order: O) {
    let reversed = Reversed(order);
    build(elements, &reversed);
    for end in (1..elements.len()).rev() {
        elements.swap(0, end);
        sift_down(&mut elements[..end], 0, &reversed);
    }
}

/// Sorts `elements` ascending.
pub fn heap_sort<T: Ord>(elements: &mut [T]) {
    sort_by_order(elements, MinOrder);
}

/// Sorts `elements` ascending according to a three-way comparator.
pub fn heap_sort_by<T, F>(elements: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering + Clone,
{
    sort_by_order(elements, from_comparator(compare));
}
