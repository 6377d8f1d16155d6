//! Path management for the trip splitter
//!
//! ## Path Resolution Order
//!
//! 1. `TRIP_SPLITTER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/trip-splitter` on Linux, `%APPDATA%\trip-splitter` on Windows)

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::TripError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "TRIP_SPLITTER_DATA_DIR";

/// Manages all paths used by the trip splitter
#[derive(Debug, Clone)]
pub struct TripPaths {
    base_dir: PathBuf,
}

impl TripPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TripError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TripPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to trips.json
    pub fn trips_file(&self) -> PathBuf {
        self.data_dir().join("trips.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TripError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TripError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TripError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the trip splitter has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TripError> {
    ProjectDirs::from("", "", "trip-splitter")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TripError::Config("Could not determine a home directory".into()))
}
