//! # underbar-core
//!
//! Core types and utilities shared across all underbar crates.
//!
//! This crate provides:
//! - `Mapping`, the insertion-ordered key/value collection merged by
//!   `extend` and `defaults`
//! - `Primitive` and `ArgList`, which turn argument tuples into cache keys
//! - `UnderbarError` enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Mapping, Primitive, ArgList)
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{UnderbarError, UnderbarResult};
pub use types::{mapping_from, ArgList, Mapping, Primitive};
