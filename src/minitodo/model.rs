use chrono::{DateTime, Utc};

/// Size of the text and category buffers, terminator included.
pub const MAX_LENGTH: usize = 128;

/// Default number of todos a list accepts.
pub const MAX_TODOS: usize = 100;

/// A single task.
///
/// `text` and `category` never exceed `MAX_LENGTH - 1` bytes; longer input is
/// cut at the last character boundary that fits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Todo {
    text: String,
    category: String,
    due_date: Option<DateTime<Utc>>,
    done: bool,
}

impl Todo {
    pub fn new(text: &str) -> Self {
        Self {
            text: bounded(text),
            ..Self::default()
        }
    }

    pub fn from_parts(
        text: &str,
        category: &str,
        due_date: Option<DateTime<Utc>>,
        done: bool,
    ) -> Self {
        Self {
            text: bounded(text),
            category: bounded(category),
            due_date: after_epoch(due_date),
            done,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = bounded(text);
    }

    pub(crate) fn set_category(&mut self, category: &str) {
        self.category = bounded(category);
    }

    pub(crate) fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = after_epoch(due_date);
    }

    pub(crate) fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// A stored timestamp of zero or below reads back as "no due date".
fn after_epoch(due_date: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    due_date.filter(|due| due.timestamp() > 0)
}

/// Truncates `s` to at most `MAX_LENGTH - 1` bytes without splitting a
/// character. A NUL ends the string, as it does on disk.
pub fn bounded(s: &str) -> String {
    let s = s.find('\0').map_or(s, |end| &s[..end]);
    let limit = MAX_LENGTH - 1;
    if s.len() <= limit {
        return s.to_string();
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}
