//! # underbar
//!
//! Small, independent helpers in two families:
//!
//! - object helpers: [`extend`] and [`defaults`] merge string-keyed mappings
//!   into a target in place
//! - function helpers: [`once`], [`memoize`] and [`delay`] change how a
//!   function gets called, [`shuffle`] reorders a sequence
//!
//! ```
//! use underbar::{extend, mapping_from, memoize, once};
//!
//! let mut settings = mapping_from([("a", 1)]);
//! extend(&mut settings, [&mapping_from([("b", 2)]), &mapping_from([("a", 3)])]);
//! assert_eq!(settings["a"], 3);
//!
//! let setup = once(|()| "ready");
//! assert_eq!(setup.call(()), "ready");
//!
//! let slow_double = memoize(|(n,): (u32,)| n * 2);
//! assert_eq!(slow_double.call((21,)), 42);
//! ```

// Re-export the whole surface
pub use underbar_collections::{shuffle, shuffle_seeded, shuffle_with};
pub use underbar_config::{init_logging, ConfigLayering, LogFormat, UnderbarConfig};
pub use underbar_core::{mapping_from, ArgList, Mapping, Primitive, UnderbarError, UnderbarResult};
pub use underbar_functions::{
    delay, delay_fallible, delay_on, memoize, once, try_memoize, try_once, CacheStats, MemoCache,
    Memoized, Once,
};
pub use underbar_objects::{defaults, defaults_json, extend, extend_json};
