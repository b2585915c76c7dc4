//! Proofs for the index helpers and slice-level sift procedures

#[cfg(kani)]
use order_heap::index::{last_internal, left_child, parent, right_child};
#[cfg(kani)]
use order_heap::order::MinOrder;
#[cfg(kani)]
use order_heap::sift::{is_heap, sift_down, sift_up};

/// Proof: both children of any index map back to it
#[cfg(kani)]
#[kani::proof]
fn verify_child_parent_round_trip() {
    let i: usize = kani::any();
    kani::assume(i < usize::MAX / 4);

    assert!(parent(left_child(i)) == Some(i));
    assert!(parent(right_child(i)) == Some(i));
    assert!(parent(0).is_none());
}

/// Proof: last_internal is the last slot with a child in range
#[cfg(kani)]
#[kani::proof]
fn verify_last_internal_boundary() {
    let len: usize = kani::any();
    kani::assume(len < usize::MAX / 4);

    match last_internal(len) {
        None => assert!(len < 2),
        Some(last) => {
            assert!(left_child(last) < len);
            assert!(left_child(last + 1) >= len);
        }
    }
}

/// Proof: sift_down repairs a root-only violation
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_sift_down_repairs_root() {
    let mut values: [u8; 6] = kani::any();
    // Subtrees of the root are valid heaps: replacing the root with the
    // smallest possible value yields a heap
    let mut rest = values;
    rest[0] = 0;
    kani::assume(is_heap(&rest, &MinOrder));

    sift_down(&mut values, 0, &MinOrder);
    assert!(is_heap(&values, &MinOrder));
}

/// Proof: sift_up repairs a violation at the last slot
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_sift_up_repairs_last() {
    let mut values: [u8; 6] = kani::any();
    let mut prefix = [0u8; 5];
    prefix.copy_from_slice(&values[..5]);
    kani::assume(is_heap(&prefix, &MinOrder));

    sift_up(&mut values, 5, &MinOrder);
    assert!(is_heap(&values, &MinOrder));
}
