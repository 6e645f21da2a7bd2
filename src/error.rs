//! Custom error types for the todo app.
//!
//! Only two things can actually go wrong at runtime: resolving where the
//! task list lives, and writing it back. Reads never surface an error (see
//! [`crate::store`]), so most variants here describe configuration or
//! write-side failures.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for todo app operations
#[derive(Error, Debug)]
pub enum TodoError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to set up configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// The platform exposes neither a data directory nor a home directory
    #[error("Could not determine a per-user data directory for this platform")]
    NoDataDir,

    // =========================================================================
    // Store Errors
    // =========================================================================
    /// Writing the task list to disk failed
    #[error("Failed to save tasks to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // View Errors
    // =========================================================================
    /// Terminal setup, drawing, or input failed
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create a save error for the given store file
    pub fn save(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Save {
            path: path.into(),
            source,
        }
    }

    /// Create a terminal error
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Check if this error came from persisting the task list
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Save { .. } | Self::Json(_))
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Save { .. } | Self::Json(_) => 3,
            Self::Config { .. } | Self::NoDataDir => 7,
            _ => 1,
        }
    }
}

/// Type alias for todo app results
pub type Result<T> = std::result::Result<T, TodoError>;
