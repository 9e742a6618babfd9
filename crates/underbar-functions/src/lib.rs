//! Function decorators
//!
//! Each decorator takes a function and returns a wrapper that calls it in a
//! different way:
//! - [`once`]: run at most one time, replay the first result afterwards
//! - [`memoize`]: run once per distinct argument list
//! - [`delay`]: run later on the tokio timer, fire and forget
//!
//! Wrapped functions take their arguments as a single value; use a tuple for
//! several arguments, e.g. `|(a, b): (i32, i32)| a + b` called as `call((1, 2))`.

pub mod delay;
pub mod memoize;
pub mod once;

// Re-export main types
pub use delay::{delay, delay_fallible, delay_on};
pub use memoize::{memoize, try_memoize, CacheStats, MemoCache, Memoized};
pub use once::{once, try_once, Once};
