//! Build configuration.
//!
//! The generator needs four things: where the trips live, which template to
//! fill, where to write the page, and the marker token to replace. All of
//! them have fixed defaults, so running with no arguments and no config file
//! builds `index.html` from `template.html` and `travel/`.
//!
//! ## Config File
//!
//! A TOML file, read only when passed with `--config`, overrides any subset
//! of the defaults. A plain run never looks for one:
//!
//! ```toml
//! # All options are optional - defaults shown below
//! travel_dir = "travel"
//! template = "template.html"
//! output = "index.html"
//! marker = "<!-- PUT CONTENT HERE -->"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Token in the template that is replaced by the generated trips.
pub const DEFAULT_MARKER: &str = "<!-- PUT CONTENT HERE -->";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Paths and marker for one build.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Root directory holding one subdirectory per trip.
    pub travel_dir: PathBuf,
    /// Template file containing the marker token.
    pub template: PathBuf,
    /// Generated page, overwritten on every build.
    pub output: PathBuf,
    /// Literal token replaced by the rendered trips.
    pub marker: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            travel_dir: PathBuf::from("travel"),
            template: PathBuf::from("template.html"),
            output: PathBuf::from("index.html"),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl BuildConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.is_empty() {
            return Err(ConfigError::Validation("marker must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        Ok(())
    }

    /// Travel directory as a URL path prefix for `<img src>`.
    pub fn image_root(&self) -> String {
        self.travel_dir.to_string_lossy().replace('\\', "/")
    }
}

/// Parse a TOML string into a validated config. Missing keys keep defaults.
pub fn parse_config(content: &str) -> Result<BuildConfig, ConfigError> {
    let config: BuildConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`. The file must exist.
pub fn load_config(path: &Path) -> Result<BuildConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Config for one run: the defaults, or `path` layered over them.
pub fn resolve_config(path: Option<&Path>) -> Result<BuildConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(BuildConfig::default()),
    }
}
