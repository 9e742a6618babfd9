//! tracing subscriber setup

use tracing_subscriber::EnvFilter;
use underbar_core::UnderbarError;

use crate::settings::{LogFormat, UnderbarConfig};
use crate::ConfigResult;

/// Log targets of the underbar crates
const TARGETS: [&str; 6] = [
    "underbar",
    "underbar_core",
    "underbar_objects",
    "underbar_functions",
    "underbar_collections",
    "underbar_config",
];

/// Filter directives enabling `level` for every underbar crate
pub fn filter_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global fmt subscriber described by `config`.
///
/// Returns `Ok(false)` if a global subscriber was already installed, which
/// leaves that subscriber in place.
pub fn init_logging(config: &UnderbarConfig) -> ConfigResult<bool> {
    let filter = EnvFilter::try_new(filter_directives(&config.log_level))
        .map_err(|e| UnderbarError::invalid_field("log_level", e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.log_format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.log_level, format = %config.log_format, "logging initialized");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        let directives = filter_directives("debug");
        assert!(directives.starts_with("underbar=debug,"));
        assert!(directives.contains("underbar_functions=debug"));
        assert_eq!(directives.split(',').count(), TARGETS.len());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = UnderbarConfig::default();
        let first = init_logging(&config).unwrap();
        let second = init_logging(&config).unwrap();
        // Whichever call won, the other must report the existing subscriber
        assert!(!(first && second));
    }
}
