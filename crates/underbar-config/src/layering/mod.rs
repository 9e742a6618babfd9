//! Configuration layering and environment overrides

use std::ffi::OsString;
use tracing::debug;
use underbar_core::{mapping_from, Mapping};
use underbar_objects::{defaults, extend};

/// Prefix of environment variables that override settings
pub const ENV_PREFIX: &str = "UNDERBAR_";

/// Combines raw settings layers, later layers winning
pub struct ConfigLayering;

impl ConfigLayering {
    /// Values used when no layer sets a key
    pub fn builtin_defaults() -> Mapping<String> {
        mapping_from([
            ("log_level", "info".to_string()),
            ("log_format", "pretty".to_string()),
        ])
    }

    /// Merge the file layer and environment layer on top of the defaults
    pub fn merge_layers(
        file_settings: Option<&Mapping<String>>,
        env_overrides: &Mapping<String>,
    ) -> Mapping<String> {
        let mut merged = Mapping::new();

        // Explicit layers first, lowest priority first
        extend(&mut merged, file_settings.into_iter().chain([env_overrides]));

        // Fill whatever no layer mentioned
        defaults(&mut merged, [&Self::builtin_defaults()]);

        debug!(keys = merged.len(), "resolved configuration layers");
        merged
    }

    /// Collect environment variable overrides; entries that are not valid UTF-8 are skipped
    pub fn collect_env_overrides() -> Mapping<String> {
        Self::env_overrides_from(utf8_vars(std::env::vars_os()))
    }

    /// Turn `UNDERBAR_*` variables into settings keys (`UNDERBAR_LOG_LEVEL` -> `log_level`)
    pub fn env_overrides_from<I>(vars: I) -> Mapping<String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut overrides = Mapping::new();

        for (key, value) in vars {
            if let Some(name) = key.strip_prefix(ENV_PREFIX) {
                overrides.insert(name.to_lowercase(), value);
            }
        }

        overrides
    }
}

/// Keep only variables whose name and value are both valid UTF-8
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter().filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
        (Ok(key), Ok(value)) => Some((key, value)),
        (Ok(key), Err(_)) => {
            debug!(%key, "skipping environment variable with non UTF-8 value");
            None
        },
        _ => None,
    })
}
