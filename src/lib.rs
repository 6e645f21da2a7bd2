//! Simple Todo - a single-user task list
//!
//! Tasks are added, completed, removed and cleared through a terminal list
//! view, and the whole list is saved to a JSON file in the per-user data
//! directory after every change.
//!
//! # Architecture
//!
//! - [`config`] - Where the task list lives
//! - [`error`] - Custom error types and handling
//! - [`task`] - The task record
//! - [`store`] - Flat-file persistence
//! - [`controller`] - The four list operations, independent of any UI
//! - [`ui`] - Terminal list view and modal dialogs
//! - [`testing`] - In-memory store and scripted dialogs
//!
//! # Example
//!
//! ```rust,no_run
//! use simple_todo::{AppConfig, JsonFileStore, TodoController};
//!
//! let config = AppConfig::from_platform()?;
//! let store = JsonFileStore::open(&config)?;
//! let mut todo = TodoController::load(store);
//! todo.add("Buy milk")?;
//! for row in todo.render() {
//!     println!("{row}");
//! }
//! # Ok::<(), simple_todo::TodoError>(())
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod store;
pub mod task;
pub mod testing;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use controller::{format_row, Dialogs, TodoController};
pub use error::{Result, TodoError};
pub use store::{JsonFileStore, LoadOutcome, TaskStore};
pub use task::Task;
