//! Configuration file handling.
//!
//! This module provides loading and saving of depsentry configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/depsentry/config.toml`
//! - macOS: `~/Library/Application Support/depsentry/config.toml`
//! - Windows: `%APPDATA%\depsentry\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! risk_list = "/opt/depsentry/potentially-dangerous-libraries.json"
//! audit_command = ["npm", "audit", "--omit=dev"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Application configuration.
///
/// Every key is optional; a missing file yields [`Config::default`].
///
/// # Example
///
/// ```no_run
/// use depsentry::Config;
///
/// let config = Config::load().unwrap();
/// println!("Audit command: {:?}", config.audit_command);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit location of the risk-list JSON document.
    ///
    /// Default: unset (search the working directory, then the executable's directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_list: Option<PathBuf>,

    /// Program and arguments used for the dependency audit.
    ///
    /// Default: `["npm", "audit"]` (`npm.cmd` on Windows)
    pub audit_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let npm = if cfg!(target_os = "windows") { "npm.cmd" } else { "npm" };
        Self {
            risk_list: None,
            audit_command: vec![npm.to_string(), "audit".to_string()],
        }
    }
}

impl Config {
    /// Loads configuration from the default config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path, with the same fallback rules as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to the default config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// # Example
    ///
    /// ```
    /// use depsentry::Config;
    ///
    /// let path = Config::config_path();
    /// assert!(path.ends_with("depsentry/config.toml"));
    /// ```
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("depsentry")
            .join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }

    fn validate(&self) -> Result<()> {
        match self.audit_command.first() {
            Some(program) if !program.trim().is_empty() => Ok(()),
            _ => Err(Error::Config(
                "audit_command must name a program".to_string(),
            )),
        }
    }
}
