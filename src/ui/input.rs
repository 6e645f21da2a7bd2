//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the list view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddTask,
    MarkDone,
    Remove,
    ClearAll,
    SelectNext,
    SelectPrevious,
    Deselect,
    Quit,
}

/// Control bar entries: key label and control name.
pub const CONTROLS: [(&str, &str); 5] = [
    ("a", "Add Task"),
    ("d", "Mark Done"),
    ("r", "Remove"),
    ("c", "Clear All"),
    ("q", "Quit"),
];

/// Map a key press in the list view to an action.
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('a') | KeyCode::Insert => Some(Action::AddTask),
        KeyCode::Char('d') | KeyCode::Char(' ') => Some(Action::MarkDone),
        KeyCode::Char('r') | KeyCode::Delete => Some(Action::Remove),
        KeyCode::Char('c') => Some(Action::ClearAll),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Esc => Some(Action::Deselect),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Result of feeding a key to a text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInput {
    Submit,
    Cancel,
    Editing,
}

/// Apply a key press to a text prompt's buffer.
pub fn edit_line(buffer: &mut String, key: KeyEvent) -> LineInput {
    match key.code {
        KeyCode::Enter => LineInput::Submit,
        KeyCode::Esc => LineInput::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => LineInput::Cancel,
        KeyCode::Backspace => {
            buffer.pop();
            LineInput::Editing
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(c);
            LineInput::Editing
        }
        _ => LineInput::Editing,
    }
}

/// Answer to a yes/no prompt, or `None` if the key means neither.
#[must_use]
pub fn yes_no(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}
