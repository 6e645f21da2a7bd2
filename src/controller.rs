//! Task list controller.
//!
//! Owns the in-memory task list and its store, and exposes the four user
//! operations. Every successful mutation is saved before the call returns,
//! so the list and the file never disagree once an operation completes.
//! User interaction (text prompt, confirmation, warning) goes through the
//! [`Dialogs`] trait, which keeps the controller usable without a UI.

use tracing::debug;

use crate::error::Result;
use crate::store::TaskStore;
use crate::task::Task;

/// Title of the add prompt.
pub const ADD_TITLE: &str = "Add Task";
/// Label of the add prompt's input field.
pub const ADD_PROMPT: &str = "Task title:";
/// Title of the no-selection warning.
pub const WARNING_TITLE: &str = "Warning";
/// Text of the no-selection warning.
pub const NO_SELECTION_MESSAGE: &str = "Select a task first";
/// Title of the clear confirmation.
pub const CONFIRM_TITLE: &str = "Confirm";
/// Text of the clear confirmation.
pub const CLEAR_ALL_MESSAGE: &str = "Clear all tasks?";

/// Modal prompts the controller needs from its host.
pub trait Dialogs {
    /// Ask for a line of text. `None` means the prompt was cancelled.
    fn ask_string(&mut self, title: &str, prompt: &str) -> Result<Option<String>>;

    /// Ask a yes/no question.
    fn ask_yes_no(&mut self, title: &str, message: &str) -> Result<bool>;

    /// Show a warning and wait for it to be dismissed.
    fn show_warning(&mut self, title: &str, message: &str) -> Result<()>;
}

/// Format one list row: `"<n>. [<glyph>] <title>"` with `n` starting at 1.
#[must_use]
pub fn format_row(index: usize, task: &Task) -> String {
    format!("{}. [{}] {}", index + 1, task.glyph(), task.title)
}

/// Mediates between user actions, the task list and the store.
#[derive(Debug)]
pub struct TodoController<S: TaskStore> {
    tasks: Vec<Task>,
    store: S,
}

impl<S: TaskStore> TodoController<S> {
    /// Build a controller from whatever the store currently holds.
    pub fn load(store: S) -> Self {
        let tasks = store.load();
        Self { tasks, store }
    }

    /// Current tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a new pending task.
    ///
    /// Blank titles are ignored and return `Ok(None)`. Otherwise returns the
    /// index of the new task.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be saved.
    pub fn add(&mut self, title: &str) -> Result<Option<usize>> {
        let Some(task) = Task::new(title) else {
            debug!("Ignoring blank task title");
            return Ok(None);
        };

        debug!(title = %task.title, "Adding task");
        self.tasks.push(task);
        self.persist()?;
        Ok(Some(self.tasks.len() - 1))
    }

    /// The "Add Task" control: prompt for a title, then [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or the list cannot be saved.
    pub fn prompt_add(&mut self, dialogs: &mut impl Dialogs) -> Result<Option<usize>> {
        match dialogs.ask_string(ADD_TITLE, ADD_PROMPT)? {
            Some(title) => self.add(&title),
            None => Ok(None),
        }
    }

    /// Mark the selected task done.
    ///
    /// With no valid selection a warning is shown and `Ok(false)` returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the warning cannot be shown or the list cannot
    /// be saved.
    pub fn complete(
        &mut self,
        selection: Option<usize>,
        dialogs: &mut impl Dialogs,
    ) -> Result<bool> {
        let Some(index) = self.resolve(selection) else {
            dialogs.show_warning(WARNING_TITLE, NO_SELECTION_MESSAGE)?;
            return Ok(false);
        };

        debug!(index, "Completing task");
        self.tasks[index].complete();
        self.persist()?;
        Ok(true)
    }

    /// Remove the selected task and return it.
    ///
    /// With no valid selection a warning is shown and `Ok(None)` returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the warning cannot be shown or the list cannot
    /// be saved.
    pub fn remove(
        &mut self,
        selection: Option<usize>,
        dialogs: &mut impl Dialogs,
    ) -> Result<Option<Task>> {
        let Some(index) = self.resolve(selection) else {
            dialogs.show_warning(WARNING_TITLE, NO_SELECTION_MESSAGE)?;
            return Ok(None);
        };

        debug!(index, "Removing task");
        let removed = self.tasks.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Empty the list after the user confirms. Returns whether it was cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation fails or the list cannot be
    /// saved.
    pub fn clear_all(&mut self, dialogs: &mut impl Dialogs) -> Result<bool> {
        if !dialogs.ask_yes_no(CONFIRM_TITLE, CLEAR_ALL_MESSAGE)? {
            debug!("Clear all declined");
            return Ok(false);
        }

        debug!(count = self.tasks.len(), "Clearing all tasks");
        self.tasks.clear();
        self.persist()?;
        Ok(true)
    }

    /// Rows for the list view, in order.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format_row(i, task))
            .collect()
    }

    /// A selection counts only if it points at an existing row.
    fn resolve(&self, selection: Option<usize>) -> Option<usize> {
        selection.filter(|&i| i < self.tasks.len())
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;
    use crate::testing::{DialogCall, MemoryStore, MockDialogs};
    use tempfile::TempDir;

    fn controller() -> TodoController<MemoryStore> {
        TodoController::load(MemoryStore::new())
    }

    fn titles<S: TaskStore>(c: &TodoController<S>) -> Vec<&str> {
        c.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    fn seeded(titles: &[&str]) -> TodoController<MemoryStore> {
        let mut c = controller();
        for t in titles {
            c.add(t).unwrap();
        }
        c
    }

    // =========================================================================
    // add
    // =========================================================================

    #[test]
    fn test_add_appends_in_call_order_and_persists() {
        let c = seeded(&["one", "two", "three"]);
        assert_eq!(titles(&c), vec!["one", "two", "three"]);
        assert!(c.tasks().iter().all(|t| !t.done));
        assert_eq!(c.store().saved(), c.tasks());
        assert_eq!(c.store().save_count(), 3);
    }

    #[test]
    fn test_add_blank_titles_are_ignored() {
        let mut c = seeded(&["keep"]);
        assert_eq!(c.add("").unwrap(), None);
        assert_eq!(c.add("   ").unwrap(), None);
        assert_eq!(titles(&c), vec!["keep"]);
        assert_eq!(c.store().save_count(), 1);
    }

    #[test]
    fn test_add_mixed_titles_counts_only_non_blank() {
        let mut c = controller();
        for t in ["a", "", "b", "  ", "\t", "c"] {
            c.add(t).unwrap();
        }
        assert_eq!(titles(&c), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_returns_new_index_and_trims() {
        let mut c = seeded(&["first"]);
        assert_eq!(c.add("  second  ").unwrap(), Some(1));
        assert_eq!(c.tasks()[1].title, "second");
    }

    #[test]
    fn test_prompt_add_uses_dialog_text() {
        let mut c = controller();
        let mut dialogs = MockDialogs::new().with_input(Some("Buy milk"));

        assert_eq!(c.prompt_add(&mut dialogs).unwrap(), Some(0));
        assert_eq!(titles(&c), vec!["Buy milk"]);
        assert_eq!(
            dialogs.calls(),
            &[DialogCall::AskString {
                title: ADD_TITLE.into(),
                prompt: ADD_PROMPT.into()
            }]
        );
    }

    #[test]
    fn test_prompt_add_cancelled_is_noop() {
        let mut c = controller();
        let mut dialogs = MockDialogs::new().with_input(None);
        assert_eq!(c.prompt_add(&mut dialogs).unwrap(), None);
        assert!(c.is_empty());
        assert_eq!(c.store().save_count(), 0);
    }

    // =========================================================================
    // complete
    // =========================================================================

    #[test]
    fn test_complete_without_selection_warns() {
        let mut c = seeded(&["a", "b"]);
        let before = c.tasks().to_vec();
        let mut dialogs = MockDialogs::new();

        assert!(!c.complete(None, &mut dialogs).unwrap());
        assert_eq!(c.tasks(), before.as_slice());
        assert_eq!(dialogs.warnings(), vec![NO_SELECTION_MESSAGE]);
        assert_eq!(c.store().save_count(), 2);
    }

    #[test]
    fn test_complete_out_of_range_is_treated_as_no_selection() {
        let mut c = seeded(&["a"]);
        let mut dialogs = MockDialogs::new();
        assert!(!c.complete(Some(5), &mut dialogs).unwrap());
        assert_eq!(dialogs.warnings().len(), 1);
        assert!(!c.tasks()[0].done);
    }

    #[test]
    fn test_complete_touches_only_selected_task() {
        let mut c = seeded(&["a", "b", "c"]);
        let before = c.tasks().to_vec();
        let mut dialogs = MockDialogs::new();

        assert!(c.complete(Some(1), &mut dialogs).unwrap());

        assert!(c.tasks()[1].done);
        assert_eq!(c.tasks()[0], before[0]);
        assert_eq!(c.tasks()[2], before[2]);
        assert_eq!(c.tasks()[1].title, before[1].title);
        assert_eq!(c.tasks()[1].created, before[1].created);
        assert!(dialogs.calls().is_empty());
        assert_eq!(c.store().saved(), c.tasks());
    }

    #[test]
    fn test_complete_already_done_stays_done() {
        let mut c = seeded(&["a"]);
        let mut dialogs = MockDialogs::new();
        c.complete(Some(0), &mut dialogs).unwrap();
        assert!(c.complete(Some(0), &mut dialogs).unwrap());
        assert!(c.tasks()[0].done);
    }

    // =========================================================================
    // remove
    // =========================================================================

    #[test]
    fn test_remove_without_selection_warns() {
        let mut c = seeded(&["a"]);
        let mut dialogs = MockDialogs::new();

        assert_eq!(c.remove(None, &mut dialogs).unwrap(), None);
        assert_eq!(titles(&c), vec!["a"]);
        assert_eq!(
            dialogs.calls(),
            &[DialogCall::Warning {
                title: WARNING_TITLE.into(),
                message: NO_SELECTION_MESSAGE.into()
            }]
        );
    }

    #[test]
    fn test_remove_on_empty_list_warns() {
        let mut c = controller();
        let mut dialogs = MockDialogs::new();
        assert_eq!(c.remove(Some(0), &mut dialogs).unwrap(), None);
        assert_eq!(dialogs.warnings().len(), 1);
    }

    #[test]
    fn test_remove_shifts_later_tasks_down() {
        let mut c = seeded(&["a", "b", "c", "d"]);
        let mut dialogs = MockDialogs::new();

        let removed = c.remove(Some(1), &mut dialogs).unwrap().unwrap();

        assert_eq!(removed.title, "b");
        assert_eq!(titles(&c), vec!["a", "c", "d"]);
        assert_eq!(c.store().saved(), c.tasks());
    }

    // =========================================================================
    // clear_all
    // =========================================================================

    #[test]
    fn test_clear_all_confirmed_empties_list_and_store() {
        let mut c = seeded(&["a", "b"]);
        let mut dialogs = MockDialogs::new().with_confirm(true);

        assert!(c.clear_all(&mut dialogs).unwrap());
        assert!(c.is_empty());
        assert!(c.store().saved().is_empty());
        assert_eq!(
            dialogs.calls(),
            &[DialogCall::AskYesNo {
                title: CONFIRM_TITLE.into(),
                message: CLEAR_ALL_MESSAGE.into()
            }]
        );
    }

    #[test]
    fn test_clear_all_declined_is_noop() {
        let mut c = seeded(&["a", "b"]);
        let mut dialogs = MockDialogs::new().with_confirm(false);

        assert!(!c.clear_all(&mut dialogs).unwrap());
        assert_eq!(titles(&c), vec!["a", "b"]);
        assert_eq!(c.store().save_count(), 2);
    }

    // =========================================================================
    // render
    // =========================================================================

    #[test]
    fn test_render_rows() {
        let mut c = seeded(&["Buy milk", "Walk dog"]);
        c.complete(Some(1), &mut MockDialogs::new()).unwrap();

        assert_eq!(c.render(), vec!["1. [✖] Buy milk", "2. [✔] Walk dog"]);
    }

    #[test]
    fn test_render_empty() {
        assert!(controller().render().is_empty());
    }

    // =========================================================================
    // failures and scenarios
    // =========================================================================

    #[test]
    fn test_save_failure_propagates() {
        let mut c = TodoController::load(MemoryStore::new().failing());
        let err = c.add("doomed").unwrap_err();
        assert!(err.is_store_failure());
    }

    #[test]
    fn test_load_picks_up_existing_tasks() {
        let existing = vec![Task::new("from disk").unwrap()];
        let c = TodoController::load(MemoryStore::with_tasks(existing.clone()));
        assert_eq!(c.tasks(), existing.as_slice());
    }

    #[test]
    fn test_add_after_loading_offset_stamps_keeps_existing_tasks() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("todo_data.json");
        std::fs::write(
            &path,
            r#"[
  {"title": "First", "done": false, "created": "2024-06-01T09:00:00"},
  {"title": "Keep me", "done": true, "created": "2024-06-01T09:05:00+02:00"}
]"#,
        )
        .unwrap();

        let mut c = TodoController::load(JsonFileStore::at(&path));
        assert_eq!(c.len(), 2);
        c.add("new").unwrap();

        let on_disk = JsonFileStore::at(&path).load();
        let on_disk_titles: Vec<&str> = on_disk.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(on_disk_titles, vec!["First", "Keep me", "new"]);
        assert!(on_disk[1].done);
        assert_eq!(on_disk[1].created, "2024-06-01T09:05:00+02:00");
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut c = controller();
        let mut dialogs = MockDialogs::new();

        c.add("Buy milk").unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.tasks()[0].title, "Buy milk");
        assert!(!c.tasks()[0].done);

        c.complete(Some(0), &mut dialogs).unwrap();
        assert_eq!(c.tasks()[0].title, "Buy milk");
        assert!(c.tasks()[0].done);

        c.remove(Some(0), &mut dialogs).unwrap();
        assert!(c.is_empty());
        assert!(c.store().saved().is_empty());
    }

    #[test]
    fn test_file_store_matches_memory_after_each_operation() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::at(temp.path().join("todo_data.json"));
        let mut c = TodoController::load(store);
        let mut dialogs = MockDialogs::new().with_confirm(true);

        c.add("x").unwrap();
        assert_eq!(c.store().load(), c.tasks());
        c.add("y").unwrap();
        c.complete(Some(0), &mut dialogs).unwrap();
        assert_eq!(c.store().load(), c.tasks());
        c.remove(Some(1), &mut dialogs).unwrap();
        assert_eq!(c.store().load(), c.tasks());
        c.clear_all(&mut dialogs).unwrap();
        assert!(c.store().load().is_empty());

        let reopened = TodoController::load(JsonFileStore::at(temp.path().join("todo_data.json")));
        assert!(reopened.is_empty());
    }
}
