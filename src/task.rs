//! The task record.

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

/// Glyph shown for a completed task.
pub const DONE_GLYPH: char = '✔';

/// Glyph shown for a pending task.
pub const PENDING_GLYPH: char = '✖';

/// A single to-do item.
///
/// Field order matches the on-disk object layout (`title`, `done`,
/// `created`). `created` is kept exactly as stored: it is never used for
/// ordering, so a stamp in an unexpected format must not cost the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "now_stamp", deserialize_with = "lenient_stamp")]
    pub created: String,
}

impl Task {
    /// Create a pending task stamped with the current local time.
    ///
    /// Returns `None` when the title is empty after trimming.
    #[must_use]
    pub fn new(title: &str) -> Option<Self> {
        Self::with_created(title, Local::now().naive_local())
    }

    /// Create a pending task with an explicit creation time.
    #[must_use]
    pub fn with_created(title: &str, created: NaiveDateTime) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            done: false,
            created: iso_stamp(created),
        })
    }

    /// Mark the task done. There is no way back to pending.
    pub fn complete(&mut self) {
        self.done = true;
    }

    /// Completion glyph for display.
    #[must_use]
    pub fn glyph(&self) -> char {
        if self.done {
            DONE_GLYPH
        } else {
            PENDING_GLYPH
        }
    }

    /// Creation time as local wall-clock time, if the stamp parses.
    ///
    /// Accepts stamps with an offset (`+02:00`, `Z`) and naive ones.
    #[must_use]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        DateTime::parse_from_rfc3339(&self.created)
            .map(|dt| dt.naive_local())
            .ok()
            .or_else(|| self.created.parse::<NaiveDateTime>().ok())
    }
}

/// Format a timestamp as ISO-8601 with microsecond precision, dropping the
/// fraction when it is zero.
#[must_use]
pub fn iso_stamp(at: NaiveDateTime) -> String {
    if at.nanosecond() / 1_000 == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

fn now_stamp() -> String {
    iso_stamp(Local::now().naive_local())
}

/// Keep any string as-is; anything else (null, numbers) is restamped.
fn lenient_stamp<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => now_stamp(),
    })
}
