//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// File name used when no data file is configured
pub const DEFAULT_DATA_FILE: &str = "students.txt";

/// Main configuration for a Roster session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Flat file holding one record per line.
    /// Relative paths resolve against the process working directory.
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Finish the builder, rejecting an empty data file path
    pub fn build(self) -> Result<Config> {
        if self.config.data_file.as_os_str().is_empty() {
            return Err(RosterError::Config(
                "data file path must not be empty".to_string(),
            ));
        }
        Ok(self.config)
    }
}
