//! Test doubles for the controller's collaborators.
//!
//! [`MemoryStore`] stands in for the JSON file and [`MockDialogs`] for the
//! modal prompts, so controller behaviour can be exercised without a disk
//! or a terminal.
//!
//! # Example
//!
//! ```rust
//! use simple_todo::testing::{MemoryStore, MockDialogs};
//! use simple_todo::TodoController;
//!
//! let mut todo = TodoController::load(MemoryStore::new());
//! let mut dialogs = MockDialogs::new().with_confirm(true);
//!
//! todo.add("Buy milk").unwrap();
//! todo.complete(Some(0), &mut dialogs).unwrap();
//! assert_eq!(todo.render(), vec!["1. [✔] Buy milk"]);
//! ```

pub mod mocks;

pub use mocks::*;
