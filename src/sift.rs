//! Heap restoration procedures over plain slices
//!
//! Every function here treats the whole slice as the live heap
//! (`elements[0..len)`); to work on a prefix, pass a sub-slice. This lets the
//! same code back both [`BinaryHeap`](crate::BinaryHeap), whose live range is
//! its `Vec`, and the in-place [`sort`](crate::sort) routines, whose live
//! range shrinks as sorted elements are moved past it.
//!
//! # Time Complexity
//!
//! | Procedure    | Comparisons          |
//! |--------------|----------------------|
//! | `sift_down`  | ≤ 2 · height(index)  |
//! | `sift_up`    | ≤ depth(index)       |
//! | `build`      | ≤ 2n                 |
//! | `is_heap`    | ≤ n - 1              |

use crate::index::{last_internal, left_child, parent, right_child};
use crate::order::Order;

/// Moves the element at `index` down until neither child precedes it.
///
/// Both subtrees of `index` must already satisfy the heap property. Ties
/// keep the parent in place and favour the left child over the right.
///
/// Returns the index where the element came to rest.
pub fn sift_down<T, O>(elements: &mut [T], mut index: usize, order: &O) -> usize
where
    O: Order<T> + ?Sized,
{
    let len = elements.len();
    loop {
        let left = left_child(index);
        if left >= len {
            return index;
        }

        let mut extreme = index;
        if order.precedes(&elements[left], &elements[extreme]) {
            extreme = left;
        }
        let right = right_child(index);
        if right < len && order.precedes(&elements[right], &elements[extreme]) {
            extreme = right;
        }

        if extreme == index {
            return index;
        }
        elements.swap(index, extreme);
        index = extreme;
    }
}

/// Moves the element at `index` up while it precedes its parent.
///
/// Everything except the element at `index` must satisfy the heap property.
/// Returns the index where the element came to rest.
pub fn sift_up<T, O>(elements: &mut [T], mut index: usize, order: &O) -> usize
where
    O: Order<T> + ?Sized,
{
    while let Some(up) = parent(index) {
        if !order.precedes(&elements[index], &elements[up]) {
            break;
        }
        elements.swap(index, up);
        index = up;
    }
    index
}

/// Rearranges an arbitrary slice into heap order in O(n).
///
/// Sifts down every internal node from the last one back to the root. Leaves
/// are already one-element heaps and are skipped.
pub fn build<T, O: Order<T> + ?Sized>(elements: &mut [T], order: &O) {
    let Some(last) = last_internal(elements.len()) else {
        return;
    };
    for index in (0..=last).rev() {
        sift_down(elements, index, order);
    }
}

/// Returns the first child index that precedes its parent, if any.
pub fn first_violation<T, O>(elements: &[T], order: &O) -> Option<usize>
where
    O: Order<T> + ?Sized,
{
    (1..elements.len()).find(|&child| {
        parent(child).is_some_and(|up| order.precedes(&elements[child], &elements[up]))
    })
}

/// Returns true if the slice satisfies the heap property under `order`.
///
/// ```rust
/// use order_heap::order::{MaxOrder, MinOrder};
/// use order_heap::sift::is_heap;
///
/// assert!(is_heap(&[1, 3, 2, 7, 4], &MinOrder));
/// assert!(!is_heap(&[1, 3, 2, 7, 4], &MaxOrder));
/// assert!(is_heap::<i32, _>(&[], &MinOrder));
/// ```
pub fn is_heap<T, O: Order<T> + ?Sized>(elements: &[T], order: &O) -> bool {
    first_violation(elements, order).is_none()
}

/// Panics if the element at `index` is out of place relative to its parent
/// or either child.
///
/// Only a defect in the sift procedures can trigger this when `order` is a
/// strict weak ordering.
#[cfg(debug_assertions)]
pub(crate) fn assert_settled<T, O>(elements: &[T], index: usize, order: &O)
where
    O: Order<T> + ?Sized,
{
    if let Some(up) = parent(index) {
        assert!(
            !order.precedes(&elements[index], &elements[up]),
            "heap property violated: slot {} precedes its parent {}",
            index,
            up
        );
    }
    for child in [left_child(index), right_child(index)] {
        if child < elements.len() {
            assert!(
                !order.precedes(&elements[child], &elements[index]),
                "heap property violated: slot {} precedes its parent {}",
                child,
                index
            );
        }
    }
}
