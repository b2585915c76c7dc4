//! Kani proof harnesses
//!
//! This module contains the Kani verification proofs for the heap. The files
//! are organized by category:
//!
//! - `heap_proofs.rs`: `BinaryHeap` operation contracts (size, empty errors,
//!   heap property after every mutation)
//! - `sift_proofs.rs`: index arithmetic and the slice-level sift procedures

#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
#[cfg(kani)]
#[path = "sift_proofs.rs"]
mod sift_proofs;
