//! List view state, event loop and terminal dialogs.

use std::collections::VecDeque;
use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::widgets::ListState;
use ratatui::Terminal;
use tracing::{debug, info};

use super::input::{self, Action, LineInput};
use super::render::{self, Modal};
use super::WINDOW_TITLE;
use crate::controller::{Dialogs, TodoController};
use crate::error::{Result, TodoError};
use crate::store::TaskStore;

/// Source of key presses for the view.
pub trait KeySource {
    /// Block until the next input event.
    ///
    /// Returns `Ok(None)` for events that only require a redraw (resize,
    /// focus changes, key releases).
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads key presses from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed sequence of key presses. Errors once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    /// Queue `keys` to be returned in order.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Keys not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        self.keys
            .pop_front()
            .map(Some)
            .ok_or_else(|| TodoError::terminal("no more scripted keys"))
    }
}

/// State of the list view: the controller plus the current selection.
#[derive(Debug)]
pub struct App<S: TaskStore> {
    controller: TodoController<S>,
    selection: ListState,
    should_quit: bool,
}

impl<S: TaskStore> App<S> {
    /// Wrap a loaded controller; nothing is selected initially.
    pub fn new(controller: TodoController<S>) -> Self {
        Self {
            controller,
            selection: ListState::default(),
            should_quit: false,
        }
    }

    /// The controller behind the view.
    #[must_use]
    pub fn controller(&self) -> &TodoController<S> {
        &self.controller
    }

    /// Index of the highlighted row, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// Whether the user asked to leave the view.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Carry out one action. Dialogs are only touched by the four controls.
    ///
    /// A successful mutation rebuilds the list, which drops the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if a dialog fails or the store cannot be written.
    pub fn apply(&mut self, action: Action, dialogs: &mut impl Dialogs) -> Result<()> {
        let selected = self.selected();
        let changed = match action {
            Action::AddTask => self.controller.prompt_add(dialogs)?.is_some(),
            Action::MarkDone => self.controller.complete(selected, dialogs)?,
            Action::Remove => self.controller.remove(selected, dialogs)?.is_some(),
            Action::ClearAll => self.controller.clear_all(dialogs)?,
            Action::SelectNext => {
                self.select_next();
                false
            }
            Action::SelectPrevious => {
                self.select_previous();
                false
            }
            Action::Deselect => {
                self.selection.select(None);
                false
            }
            Action::Quit => {
                self.should_quit = true;
                false
            }
        };

        if changed {
            self.selection.select(None);
        }
        Ok(())
    }

    fn select_next(&mut self) {
        let len = self.controller.len();
        if len == 0 {
            return;
        }
        let next = match self.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.selection.select(Some(next));
    }

    fn select_previous(&mut self) {
        let len = self.controller.len();
        if len == 0 {
            return;
        }
        let previous = match self.selected() {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        };
        self.selection.select(Some(previous));
    }
}

/// Modal dialogs drawn over a snapshot of the list.
///
/// Each dialog runs its own input loop until it is answered, so the
/// controller sees ordinary blocking calls.
pub struct TerminalDialogs<'a, B: Backend, K: KeySource> {
    terminal: &'a mut Terminal<B>,
    keys: &'a mut K,
    rows: Vec<String>,
    selection: ListState,
}

impl<'a, B: Backend, K: KeySource> TerminalDialogs<'a, B, K> {
    /// Dialogs drawn over `rows` with `selection` highlighted.
    pub fn new(
        terminal: &'a mut Terminal<B>,
        keys: &'a mut K,
        rows: Vec<String>,
        selection: ListState,
    ) -> Self {
        Self {
            terminal,
            keys,
            rows,
            selection,
        }
    }

    fn show(&mut self, modal: &Modal<'_>) -> Result<()> {
        let rows = &self.rows;
        let selection = &mut self.selection;
        self.terminal
            .draw(|frame| render::draw(frame, rows, selection, Some(modal)))
            .map_err(|e| TodoError::terminal(e.to_string()))?;
        Ok(())
    }
}

impl<B: Backend, K: KeySource> Dialogs for TerminalDialogs<'_, B, K> {
    fn ask_string(&mut self, title: &str, prompt: &str) -> Result<Option<String>> {
        let mut buffer = String::new();
        loop {
            self.show(&Modal::Input {
                title,
                prompt,
                buffer: &buffer,
            })?;
            let Some(key) = self.keys.next_key()? else {
                continue;
            };
            match input::edit_line(&mut buffer, key) {
                LineInput::Submit => return Ok(Some(buffer)),
                LineInput::Cancel => return Ok(None),
                LineInput::Editing => {}
            }
        }
    }

    fn ask_yes_no(&mut self, title: &str, message: &str) -> Result<bool> {
        loop {
            self.show(&Modal::Confirm { title, message })?;
            if let Some(answer) = self.keys.next_key()?.and_then(input::yes_no) {
                return Ok(answer);
            }
        }
    }

    fn show_warning(&mut self, title: &str, message: &str) -> Result<()> {
        loop {
            self.show(&Modal::Warning { title, message })?;
            if self.keys.next_key()?.is_some() {
                return Ok(());
            }
        }
    }
}

/// Draw, read a key, act; until the user quits.
///
/// # Errors
///
/// Returns the first terminal or store failure.
pub fn run_loop<B: Backend, S: TaskStore, K: KeySource>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    keys: &mut K,
) -> Result<()> {
    while !app.should_quit() {
        let rows = app.controller.render();
        terminal
            .draw(|frame| render::draw(frame, &rows, &mut app.selection, None))
            .map_err(|e| TodoError::terminal(e.to_string()))?;

        let Some(key) = keys.next_key()? else {
            continue;
        };
        let Some(action) = input::action_for(key) else {
            continue;
        };

        debug!(?action, "Key action");
        let mut dialogs = TerminalDialogs::new(terminal, keys, rows, app.selection.clone());
        app.apply(action, &mut dialogs)?;
    }
    Ok(())
}

/// Take over the terminal, run the list view, and restore the terminal.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored, or if
/// saving the task list fails while the view is running.
pub fn run<S: TaskStore>(controller: TodoController<S>) -> Result<()> {
    info!("Opening list view with {} tasks", controller.len());

    // Restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut terminal = undo_on_error(enter_view, || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    })?;

    let mut app = App::new(controller);
    let result = run_loop(&mut terminal, &mut app, &mut CrosstermKeys);

    restore(&mut terminal)?;
    info!("List view closed");
    result
}

fn enter_view() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Run `step`; if it fails, run `undo` before handing back the error.
fn undo_on_error<T>(step: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    step().inspect_err(|_| undo())
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
