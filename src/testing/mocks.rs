//! Mock implementations of the store and dialog traits.

use crate::controller::Dialogs;
use crate::error::{Result, TodoError};
use crate::store::TaskStore;
use crate::task::Task;

/// In-memory task store.
///
/// # Example
///
/// ```rust,ignore
/// let store = MemoryStore::with_tasks(vec![Task::new("seed").unwrap()]);
/// assert_eq!(store.load().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    saves: u32,
    fail_saves: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// Make every save fail as if the disk were full.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// What the last successful save wrote.
    #[must_use]
    pub fn saved(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if self.fail_saves {
            return Err(TodoError::save(
                "memory",
                std::io::Error::other("simulated write failure"),
            ));
        }
        self.tasks = tasks.to_vec();
        self.saves += 1;
        Ok(())
    }
}

/// A recorded dialog invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCall {
    AskString { title: String, prompt: String },
    AskYesNo { title: String, message: String },
    Warning { title: String, message: String },
}

/// Scripted dialogs that record every call.
///
/// Text prompts answer with the configured input (cancel by default) and
/// confirmations with the configured answer (no by default).
#[derive(Debug, Clone, Default)]
pub struct MockDialogs {
    input: Option<String>,
    confirm: bool,
    calls: Vec<DialogCall>,
}

impl MockDialogs {
    /// Create a mock that cancels prompts and declines confirmations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer to text prompts; `None` cancels.
    #[must_use]
    pub fn with_input(mut self, input: Option<&str>) -> Self {
        self.input = input.map(str::to_string);
        self
    }

    /// Set the answer to yes/no questions.
    #[must_use]
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// All calls so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[DialogCall] {
        &self.calls
    }

    /// Messages of the warnings shown so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DialogCall::Warning { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Dialogs for MockDialogs {
    fn ask_string(&mut self, title: &str, prompt: &str) -> Result<Option<String>> {
        self.calls.push(DialogCall::AskString {
            title: title.to_string(),
            prompt: prompt.to_string(),
        });
        Ok(self.input.clone())
    }

    fn ask_yes_no(&mut self, title: &str, message: &str) -> Result<bool> {
        self.calls.push(DialogCall::AskYesNo {
            title: title.to_string(),
            message: message.to_string(),
        });
        Ok(self.confirm)
    }

    fn show_warning(&mut self, title: &str, message: &str) -> Result<()> {
        self.calls.push(DialogCall::Warning {
            title: title.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
