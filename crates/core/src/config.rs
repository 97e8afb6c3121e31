//! Check-in configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! or missing file yields the stock setup.
//!
//! ```toml
//! capacity = 50
//! database = "/var/lib/checkin/checkin.db"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::DEFAULT_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckInConfig {
    /// Maximum number of check-ins accepted
    pub capacity: u32,
    /// Database location; the platform data directory is used when unset
    pub database: Option<PathBuf>,
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            database: None,
        }
    }
}

impl CheckInConfig {
    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CheckInConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a file, falling back to defaults if the file
    /// does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config("capacity must be at least 1".to_string()));
        }
        Ok(())
    }
}
