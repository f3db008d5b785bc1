//! Core compute primitives.
//!
//! [`SparseVector`] is the feature representation every other module produces
//! or consumes.

mod sparse_vector;

pub use sparse_vector::SparseVector;
