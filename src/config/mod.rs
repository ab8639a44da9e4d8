//! Configuration management for quicknew
//!
//! This module handles loading, parsing, and managing configuration from various sources:
//! - Configuration file (TOML format)
//! - Environment variables
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Environment variable overriding `[open] command`
pub const OPEN_COMMAND_ENV: &str = "QUICKNEW_OPEN_COMMAND";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Prompt appearance
    #[serde(default)]
    pub prompt: PromptConfig,

    /// Project folders used for the initial prompt text
    #[serde(default)]
    pub project: ProjectConfig,

    /// How created files are opened
    #[serde(default)]
    pub open: OpenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Prompt appearance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Caption shown before the input
    #[serde(default = "default_caption")]
    pub caption: String,

    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

/// Project folders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Ordered project folders; the first one seeds the prompt when there is
    /// no active document
    #[serde(default)]
    pub folders: Vec<PathBuf>,
}

/// Editor launching
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenConfig {
    /// Open the file after creating it
    #[serde(default = "default_open_enabled")]
    pub enabled: bool,

    /// Editor command line; the file path is appended as the last argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_caption() -> String {
    "Filename:".to_string()
}

fn default_color() -> bool {
    true
}

fn default_open_enabled() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            caption: default_caption(),
            color: default_color(),
        }
    }
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            enabled: default_open_enabled(),
            command: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quicknew")
            .join("config.toml")
    }

    /// Load configuration from a file
    ///
    /// With `None` the default path is used and a missing file yields the
    /// defaults. An explicitly given path must exist.
    ///
    /// # Arguments
    /// * `path` - Optional path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Serialize configuration to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Generic(e.to_string()).into())
    }

    /// Save configuration to a file, creating parent directories
    ///
    /// # Arguments
    /// * `path` - Path where to save the configuration
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Apply environment variable overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply environment variable overrides from `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(command) = lookup(OPEN_COMMAND_ENV).filter(|c| !c.trim().is_empty()) {
            self.open.command = Some(command);
        }
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.prompt.caption.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "prompt.caption".to_string(),
                value: self.prompt.caption.clone(),
            }
            .into());
        }

        if let Some(blank) = self
            .project
            .folders
            .iter()
            .find(|folder| folder.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "project.folders".to_string(),
                value: blank.display().to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
