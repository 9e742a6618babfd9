//! Sequence helpers
//!
//! Currently a single operation: [`shuffle`], which returns a uniformly
//! random permutation of a slice without touching the slice itself.

pub mod shuffle;

// Re-export main functions
pub use shuffle::{shuffle, shuffle_seeded, shuffle_with};
