//! Kani proof harnesses
//!
//! This test module contains all Kani verification proofs for the heap.
//! The proofs are organized in the tests/kani/ subdirectory.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
#[path = "kani/mod.rs"]
mod kani_module;
