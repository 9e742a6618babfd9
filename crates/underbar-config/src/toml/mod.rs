//! underbar.toml parsing
//!
//! The file carries a single `[underbar]` table of scalar settings:
//!
//! ```toml
//! [underbar]
//! shuffle_seed = 42
//! log_level = "debug"
//! log_format = "json"
//! ```
//!
//! Values are read as raw strings so they go through the same validation as
//! environment overrides.

use camino::Utf8Path;
use underbar_core::{Mapping, UnderbarError};

use crate::ConfigResult;

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "underbar.toml";

/// Table holding the settings
const SECTION: &str = "underbar";

/// Parse underbar.toml content into a raw settings layer
pub fn parse_settings(content: &str) -> ConfigResult<Mapping<String>> {
    let document: ::toml::Table = ::toml::from_str(content).map_err(|e| UnderbarError::ConfigParse {
        message: e.to_string(),
    })?;

    let mut settings = Mapping::new();
    let Some(section) = document.get(SECTION) else {
        return Ok(settings);
    };
    let table = section.as_table().ok_or_else(|| {
        UnderbarError::invalid_field(SECTION, "expected a table")
    })?;

    for (key, value) in table {
        let raw = match value {
            ::toml::Value::String(s) => s.clone(),
            ::toml::Value::Integer(i) => i.to_string(),
            ::toml::Value::Float(f) => f.to_string(),
            ::toml::Value::Boolean(b) => b.to_string(),
            _ => {
                return Err(UnderbarError::invalid_field(
                    format!("{SECTION}.{key}"),
                    "expected a string, number or boolean",
                ))
            },
        };
        settings.insert(key.clone(), raw);
    }

    Ok(settings)
}

/// Load a settings layer from a file
pub async fn load_settings(path: &Utf8Path) -> ConfigResult<Mapping<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| UnderbarError::io(format!("Failed to read {}", path), e))?;
    parse_settings(&content)
}
