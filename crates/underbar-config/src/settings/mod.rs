//! Resolved configuration

use camino::Utf8Path;
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::debug;
use underbar_core::{Mapping, UnderbarError};

use crate::layering::ConfigLayering;
use crate::ConfigResult;

/// Log levels accepted by `log_level`
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}', expected 'pretty' or 'json'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Resolved configuration for the underbar helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnderbarConfig {
    /// Seed for reproducible shuffles; `None` draws from the thread RNG
    pub shuffle_seed: Option<u64>,
    /// Level applied to the underbar crates' log targets
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for UnderbarConfig {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl UnderbarConfig {
    /// Build a config from merged raw settings. Unknown keys are ignored.
    pub fn from_settings(settings: &Mapping<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        for (key, value) in settings {
            match key.as_str() {
                "shuffle_seed" => {
                    config.shuffle_seed = parse_seed(value)?;
                },
                "log_level" => {
                    let level = value.to_ascii_lowercase();
                    if !LOG_LEVELS.contains(&level.as_str()) {
                        return Err(UnderbarError::invalid_field(
                            "log_level",
                            format!("unknown level '{}', expected one of {}", value, LOG_LEVELS.join(", ")),
                        ));
                    }
                    config.log_level = level;
                },
                "log_format" => {
                    config.log_format = value
                        .parse::<LogFormat>()
                        .map_err(|reason: String| UnderbarError::invalid_field("log_format", reason))?;
                },
                other => {
                    debug!(key = other, "ignoring unknown setting");
                },
            }
        }

        Ok(config)
    }

    /// Parse underbar.toml content on top of the defaults, without the environment
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file = crate::toml::parse_settings(content)?;
        Self::from_settings(&ConfigLayering::merge_layers(Some(&file), &Mapping::new()))
    }

    /// Resolve defaults plus environment overrides
    pub fn from_env() -> ConfigResult<Self> {
        let env = ConfigLayering::collect_env_overrides();
        Self::from_settings(&ConfigLayering::merge_layers(None, &env))
    }

    /// Resolve all layers: defaults, the file at `path` if it exists, then the environment
    pub async fn load(path: Option<&Utf8Path>) -> ConfigResult<Self> {
        let file = match path {
            Some(path) => match crate::toml::load_settings(path).await {
                Ok(settings) => Some(settings),
                Err(UnderbarError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    debug!(%path, "config file not found, using defaults");
                    None
                },
                Err(e) => return Err(e),
            },
            None => None,
        };
        let env = ConfigLayering::collect_env_overrides();

        Self::from_settings(&ConfigLayering::merge_layers(file.as_ref(), &env))
    }

    /// Shuffle `seq`, reproducibly when a seed is configured
    pub fn shuffle<T: Clone>(&self, seq: &[T]) -> Vec<T> {
        match self.shuffle_seed {
            Some(seed) => underbar_collections::shuffle_seeded(seq, seed),
            None => underbar_collections::shuffle(seq),
        }
    }
}

/// Empty means "no seed"
fn parse_seed(value: &str) -> ConfigResult<Option<u64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|e| UnderbarError::invalid_field("shuffle_seed", format!("'{}' is not a valid seed: {}", value, e)))
}
