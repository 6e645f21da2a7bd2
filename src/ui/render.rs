//! Drawing the list view and its modal dialogs.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::input::CONTROLS;
use super::WINDOW_TITLE;

/// Width of dialog popups, clamped to the screen.
const DIALOG_WIDTH: u16 = 44;

/// A dialog drawn on top of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal<'a> {
    Input {
        title: &'a str,
        prompt: &'a str,
        buffer: &'a str,
    },
    Confirm {
        title: &'a str,
        message: &'a str,
    },
    Warning {
        title: &'a str,
        message: &'a str,
    },
}

/// Draw the whole screen.
pub fn draw(
    frame: &mut Frame,
    rows: &[String],
    selection: &mut ListState,
    modal: Option<&Modal<'_>>,
) {
    let [list_area, controls_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(frame.area());

    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row.as_str())).collect();
    let list = List::new(items)
        .block(Block::bordered().title(WINDOW_TITLE))
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_area, selection);

    frame.render_widget(controls(), controls_area);

    if let Some(modal) = modal {
        draw_modal(frame, modal);
    }
}

fn controls() -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(CONTROLS.len() * 2);
    for (key, label) in CONTROLS {
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    Paragraph::new(Line::from(spans)).block(Block::bordered())
}

fn draw_modal(frame: &mut Frame, modal: &Modal<'_>) {
    let hint = Style::new().fg(Color::DarkGray);
    let (title, lines) = match modal {
        Modal::Input {
            title,
            prompt,
            buffer,
        } => (
            *title,
            vec![
                Line::raw(*prompt),
                Line::raw(format!("> {buffer}_")),
                Line::styled("Enter: OK   Esc: Cancel", hint),
            ],
        ),
        Modal::Confirm { title, message } => (
            *title,
            vec![
                Line::raw(*message),
                Line::raw(""),
                Line::styled("[y] Yes   [n] No", hint),
            ],
        ),
        Modal::Warning { title, message } => (
            *title,
            vec![
                Line::styled(*message, Style::new().fg(Color::Yellow)),
                Line::raw(""),
                Line::styled("Press any key", hint),
            ],
        ),
    };

    // Three lines of content plus borders.
    let area = centered(frame.area(), DIALOG_WIDTH, 5);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::bordered().title(title))
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
