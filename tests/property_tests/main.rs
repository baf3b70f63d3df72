//! Property-based testing for venue ticketing domain invariants
//!
//! This test target provides generators and invariant checks for venue
//! layouts, fixed text fields and ticket identity allocation.

mod domain_invariants;
