//! Shallow merging of string-keyed mappings
//!
//! `extend` copies every key of every source into a target, later sources
//! winning. `defaults` walks the same way but only fills keys the target does
//! not have yet. Both mutate the target in place and hand it back.

pub mod json;
pub mod mapping;

// Re-export main functions
pub use json::{defaults_json, extend_json};
pub use mapping::{defaults, extend};
