//! # Configuration loader
//!
//! Reads `config.toml` from the config directory. A missing file yields the
//! defaults; an unreadable or malformed file is a startup error. Missing keys
//! inside a present file fall back to their defaults field by field.

use std::path::Path;

use anyhow::Context;
use ct_core::config::AppConfig;
use tracing::debug;

pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}
