//! Application state management

use std::path::{Path, PathBuf};

use checkin_core::{CheckInConfig, Database, Error, Result};
use directories::ProjectDirs;

/// Main application state
pub struct AppState {
    pub config: CheckInConfig,
    data_dir: PathBuf,
    config_dir: PathBuf,
}

impl AppState {
    /// Resolve platform directories and load configuration
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "onyx", "checkin").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Self::with_dirs(dirs.data_dir(), dirs.config_dir())
    }

    /// Build state rooted at explicit directories
    pub fn with_dirs(data_dir: &Path, config_dir: &Path) -> Result<Self> {
        let config = CheckInConfig::load_or_default(&config_dir.join("config.toml"))?;

        Ok(Self {
            config,
            data_dir: data_dir.to_path_buf(),
            config_dir: config_dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Database location, honouring a configured override
    pub fn database_path(&self) -> PathBuf {
        self.config
            .database
            .clone()
            .unwrap_or_else(|| self.data_dir.join("checkin.db"))
    }

    /// Open the database, creating its parent directory if needed
    pub fn open_database(&self) -> Result<Database> {
        let db_path = self.database_path();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %db_path.display(), "Opening check-in database");
        Database::open(&db_path)
    }
}
