//! underbar benchmarking suite
//!
//! Benchmarks for the decorator overhead (memoize, once) and for the
//! sequence and mapping helpers.

pub mod common;

pub use common::*;
