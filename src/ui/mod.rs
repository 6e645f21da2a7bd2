//! Terminal list view.
//!
//! The view is a single full-screen "window": a bordered, scrollable list
//! of rows and a control bar for the four operations. Modal dialogs are
//! drawn over it and run their own input loop until answered.

pub mod app;
pub mod input;
pub mod render;

pub use app::{run, run_loop, App, CrosstermKeys, KeySource, ScriptedKeys, TerminalDialogs};
pub use input::Action;

/// Title of the main window and of the terminal window.
pub const WINDOW_TITLE: &str = "Todo App";
