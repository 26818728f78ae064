//! Configuration management for parakeet-models.
//!
//! Handles loading, saving, and providing defaults for the user configuration.

use crate::catalog::{self, DEFAULT_MODEL, ModelEntry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

/// Configuration for model selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Preferred catalog model. Unknown names resolve to the default model.
    pub name: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: LogLevel,
}

/// Log verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to a tracing filter directive string for the workspace crates.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "parakeet_registry=error,pmctl=error",
            LogLevel::Warn => "parakeet_registry=warn,pmctl=warn",
            LogLevel::Info => "parakeet_registry=info,pmctl=info",
            LogLevel::Debug => "parakeet_registry=debug,pmctl=debug",
            LogLevel::Trace => "parakeet_registry=trace,pmctl=trace",
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ModelConfig {
    /// The catalog entry for the configured model name.
    pub fn entry(&self) -> &'static ModelEntry {
        catalog::resolve(&self.name)
    }
}

impl Config {
    /// Returns the default config directory path.
    /// `~/.config/parakeet-models/` (or `$XDG_CONFIG_HOME/parakeet-models/`)
    pub fn config_dir() -> Result<PathBuf> {
        parakeet_models_common::dirs::config_dir()
    }

    /// Returns the default config file path.
    /// `~/.config/parakeet-models/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default path.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file as TOML")
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
