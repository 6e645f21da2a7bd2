//! Configuration for the todo app.
//!
//! The only setting is where the task list lives. It is resolved once at
//! startup and handed to the store explicitly.

use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

/// Name of the per-user application directory
pub const APP_DIR_NAME: &str = "simple_todo_app";

/// File name of the task list inside the application directory
pub const DATA_FILE_NAME: &str = "todo_data.json";

/// File name of the log file inside the application directory
pub const LOG_FILE_NAME: &str = "todo_app.log";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    data_dir: PathBuf,
}

impl AppConfig {
    /// Resolve the data directory from the platform's per-user data root.
    ///
    /// Uses `dirs::data_local_dir()`, which maps to `~/.local/share` (or
    /// `$XDG_DATA_HOME`) on Linux, `~/Library/Application Support` on macOS
    /// and `%LOCALAPPDATA%` on Windows. Falls back to the home directory.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NoDataDir`] if neither location is known.
    pub fn from_platform() -> Result<Self> {
        let root = Self::default_data_root().ok_or(TodoError::NoDataDir)?;
        Ok(Self {
            data_dir: root.join(APP_DIR_NAME),
        })
    }

    /// Use `data_dir` when given, otherwise the platform default.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NoDataDir`] if no override is given and the
    /// platform has no data or home directory.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self> {
        match data_dir {
            Some(dir) => Ok(Self::with_data_dir(dir)),
            None => Self::from_platform(),
        }
    }

    /// Use an explicit data directory instead of the platform default.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Platform data root, before the application directory is appended.
    #[must_use]
    pub fn default_data_root() -> Option<PathBuf> {
        dirs::data_local_dir().or_else(dirs::home_dir)
    }

    /// Directory holding the task list and log file.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the task list file.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }

    /// Full path of the log file.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// Create the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the path exists but is not a
    /// directory, or an IO error if it cannot be created.
    pub fn ensure_data_dir(&self) -> Result<()> {
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(TodoError::config_with_path(
                "data path exists but is not a directory",
                self.data_dir.clone(),
            ));
        }
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}
