//! Contract proofs for `BinaryHeap`
//!
//! These proofs check every execution over small symbolic inputs:
//! - insert grows size by exactly one
//! - extract on an empty heap fails without mutation
//! - the heap property holds after build, insert and extract
//! - extract returns an element no other element precedes

#[cfg(kani)]
use order_heap::{BinaryHeap, HeapError, MaxOrder, MinOrder};

/// Proof: insert always increments the size
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_size() {
    let values: [u8; 4] = kani::any();
    let mut heap = BinaryHeap::build(values, MinOrder);
    let before = heap.size();

    heap.insert(kani::any());

    assert!(heap.size() == before + 1);
    assert!(!heap.is_empty());
}

/// Proof: empty access fails and leaves the heap empty
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_errors() {
    let mut heap: BinaryHeap<u32, MinOrder> = BinaryHeap::new();

    assert!(heap.peek_root() == Err(HeapError::EmptyHeap));
    assert!(heap.extract_root() == Err(HeapError::EmptyHeap));
    assert!(heap.size() == 0);
    assert!(heap.is_empty());
}

/// Proof: build establishes the heap property for any input
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_build_establishes_invariant() {
    let values: [i8; 6] = kani::any();
    let heap = BinaryHeap::build(values, MaxOrder);

    assert!(heap.is_valid());
    assert!(heap.size() == 6);
}

/// Proof: the root after build is the maximum of the input
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_build_root_is_extreme() {
    let values: [i8; 5] = kani::any();
    let heap = BinaryHeap::build(values, MaxOrder);

    let root = *heap.peek_root().unwrap();
    for v in values {
        assert!(v <= root);
    }
}

/// Proof: insert then extract keeps the invariant and returns the minimum
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_insert_extract_invariant() {
    let values: [u8; 4] = kani::any();
    let extra: u8 = kani::any();

    let mut heap = BinaryHeap::build(values, MinOrder);
    heap.insert(extra);
    assert!(heap.is_valid());

    let root = heap.extract_root().unwrap();
    assert!(heap.is_valid());
    assert!(heap.size() == 4);
    assert!(root <= extra);
    for v in values {
        assert!(root <= v);
    }
}

/// Proof: draining a small heap yields non-decreasing values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_drain_is_sorted() {
    let values: [u8; 4] = kani::any();
    let mut heap = BinaryHeap::build(values, MinOrder);

    let mut prev = heap.extract_root().unwrap();
    while let Ok(next) = heap.extract_root() {
        assert!(prev <= next);
        prev = next;
    }
    assert!(heap.is_empty());
}
