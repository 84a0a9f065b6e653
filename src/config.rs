use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub date: DateConfig,
    pub lists: ListConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// strftime pattern passed to chrono
    pub format: String,
    pub timezone: Timezone,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            format: "%-m/%-d/%Y".to_string(),
            timezone: Timezone::Local,
        }
    }
}

/// Time zone dates are rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListConfig {
    /// Number ordered list items instead of rendering them as bullets.
    pub number_ordered: bool,
}

impl Config {
    /// The config embedded at build time from `default_config.toml`.
    ///
    /// The file is validated by the build script, so falling back to
    /// `Default` only happens if the two drift apart.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
