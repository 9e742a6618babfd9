//! Core data types for the underbar helpers.
//!
//! This module provides the fundamental types used throughout the workspace:
//! - `Mapping` for the object helpers
//! - `Primitive` and `ArgList` for memoization cache keys

pub mod args;
pub mod mapping;

// Re-export all public types
pub use args::{ArgList, Primitive};
pub use mapping::{mapping_from, Mapping};
