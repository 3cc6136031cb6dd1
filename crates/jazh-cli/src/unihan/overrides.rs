use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::PrepError;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

/// Per-character corrections to the reading-derived sets. All keys optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    pub include_for_ja: Vec<String>,
    pub exclude_for_ja: Vec<String>,
    pub include_for_zh: Vec<String>,
    pub exclude_for_zh: Vec<String>,
}

/// The template written by `unihantool init`.
pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

pub fn parse_overrides_toml(toml_str: &str) -> Result<Overrides, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Load overrides from `path`; a missing file means no overrides.
pub fn load_overrides(path: &Path) -> Result<Overrides, PrepError> {
    if !path.exists() {
        return Ok(Overrides::default());
    }
    let content = fs::read_to_string(path)?;
    parse_overrides_toml(&content).map_err(|e| PrepError::Config {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
