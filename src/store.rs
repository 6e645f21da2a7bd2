//! Flat-file persistence for the task list.
//!
//! The whole list is stored as one pretty-printed JSON array. Loading is
//! best-effort: a missing, unreadable or malformed file yields an empty
//! list. [`JsonFileStore::load_outcome`] keeps the distinction for callers
//! that want to report it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{Result, TodoError};
use crate::task::Task;

/// Temporary file suffix for atomic writes.
const TMP_SUFFIX: &str = ".tmp";

/// Durable storage for the task list.
pub trait TaskStore {
    /// Load the task list. Never fails; unusable data yields an empty list.
    fn load(&self) -> Vec<Task>;

    /// Replace the stored task list with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be serialized or written.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

/// What [`JsonFileStore::load_outcome`] found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No store file yet.
    Absent,
    /// The file exists but could not be read or parsed.
    Corrupt { reason: String },
    /// The file parsed into a task list.
    Loaded(Vec<Task>),
}

impl LoadOutcome {
    /// Collapse the outcome into a task list, empty unless `Loaded`.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            Self::Loaded(tasks) => tasks,
            Self::Absent | Self::Corrupt { .. } => Vec::new(),
        }
    }
}

/// JSON file store at `<data dir>/todo_data.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store described by `config`, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: &AppConfig) -> Result<Self> {
        config.ensure_data_dir()?;
        Ok(Self::at(config.data_file()))
    }

    /// Store backed by an explicit file path. The parent directory is not
    /// created until the first save.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the temporary file used during saves.
    #[must_use]
    pub fn tmp_file_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(TMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Load the store and report whether it was absent, corrupt or loaded.
    #[must_use]
    pub fn load_outcome(&self) -> LoadOutcome {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::Absent,
            Err(e) => {
                return LoadOutcome::Corrupt {
                    reason: e.to_string(),
                }
            }
        };

        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => LoadOutcome::Loaded(tasks),
            Err(e) => LoadOutcome::Corrupt {
                reason: e.to_string(),
            },
        }
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Vec<Task> {
        let outcome = self.load_outcome();
        match &outcome {
            LoadOutcome::Absent => {
                info!("No task file at {}, starting empty", self.path.display());
            }
            LoadOutcome::Corrupt { reason } => {
                warn!(
                    "Unusable task file at {}: {}. Starting empty.",
                    self.path.display(),
                    reason
                );
            }
            LoadOutcome::Loaded(tasks) => {
                info!("Loaded {} tasks from {}", tasks.len(), self.path.display());
            }
        }
        outcome.into_tasks()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| TodoError::save(&self.path, e))?;
        }

        let json = serde_json::to_string_pretty(tasks)?;

        let tmp_path = self.tmp_file_path();
        fs::write(&tmp_path, json.as_bytes()).map_err(|e| TodoError::save(&self.path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| TodoError::save(&self.path, e))?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
