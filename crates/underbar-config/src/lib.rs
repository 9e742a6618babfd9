//! Configuration for the underbar helpers
//!
//! Settings come from three layers, later layers winning: built-in defaults,
//! an optional `underbar.toml`, and `UNDERBAR_*` environment variables. The
//! resolved [`UnderbarConfig`] seeds reproducible shuffles and drives the
//! `tracing` subscriber installed by [`init_logging`].

pub mod layering;
pub mod logging;
pub mod settings;
pub mod toml;

// Re-export main types
pub use layering::ConfigLayering;
pub use logging::init_logging;
pub use settings::{LogFormat, UnderbarConfig};

use underbar_core::error::UnderbarError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, UnderbarError>;
