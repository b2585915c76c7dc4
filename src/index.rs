//! Index arithmetic for a complete binary tree stored in a zero-based array.
//!
//! Slot `0` is the root. The children of slot `i` live at `2i + 1` and
//! `2i + 2`, so every level is stored contiguously and a heap of `n`
//! elements occupies exactly `0..n` with no gaps.
//!
//! ```text
//!            0
//!        /       \
//!       1         2
//!     /   \     /   \
//!    3     4   5     6
//! ```
//!
//! None of these helpers check bounds against a heap length; callers compare
//! child indices with the live element count themselves.

/// Index of the parent of `index`, or `None` for the root.
///
/// # Example
///
/// ```rust
/// use order_heap::index::parent;
///
/// assert_eq!(parent(0), None);
/// assert_eq!(parent(1), Some(0));
/// assert_eq!(parent(2), Some(0));
/// assert_eq!(parent(6), Some(2));
/// ```
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Index of the left child of `index`.
#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`.
#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Index of the last node with at least one child in a heap of `len`
/// elements, or `None` if every node is a leaf.
///
/// Slots after this one are leaves and trivially satisfy the heap property.
///
/// ```rust
/// use order_heap::index::last_internal;
///
/// assert_eq!(last_internal(0), None);
/// assert_eq!(last_internal(1), None);
/// assert_eq!(last_internal(2), Some(0));
/// assert_eq!(last_internal(7), Some(2));
/// ```
#[inline]
pub fn last_internal(len: usize) -> Option<usize> {
    (len / 2).checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_point_back_to_parent() {
        for i in 0..1000 {
            assert_eq!(parent(left_child(i)), Some(i));
            assert_eq!(parent(right_child(i)), Some(i));
            assert_eq!(right_child(i), left_child(i) + 1);
        }
    }

    #[test]
    fn test_every_non_root_has_one_parent() {
        // Each index > 0 is exactly one child slot of its parent
        for i in 1..1000 {
            let p = parent(i).unwrap();
            assert!(p < i);
            assert!(left_child(p) == i || right_child(p) == i);
        }
    }

    #[test]
    fn test_last_internal_splits_leaves() {
        for len in 2..500 {
            let last = last_internal(len).unwrap();
            // last internal node has a child in range
            assert!(left_child(last) < len);
            // the next node has none
            assert!(left_child(last + 1) >= len);
        }
    }
}
