//! # Screen Model
//!
//! Turns a [`Session`] into a [`Frame`]: positioned text spans tagged with a
//! [`Paint`], ready for any terminal to draw. Building a frame does no I/O,
//! which keeps layout testable.
//!
//! ## Layout
//!
//! ```text
//! row 0        MINIMAL TODO TUI
//! row 1        Filter: All | Status: All | Search: None
//! row 3..      [ ] text (category)                     2024-05-01
//! rows - 2     capture prompt, while capturing
//! rows - 1     key help
//! ```
//!
//! When more todos are visible than fit, the list scrolls just far enough to
//! keep the selected row on screen.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dates::{format_due, urgency, Urgency};
use crate::filter::Visibility;
use crate::model::Todo;
use crate::session::{Mode, Session};

pub const TITLE: &str = "MINIMAL TODO TUI";
pub const FOOTER: &str = "a:Add d:Delete Space:Toggle e:Edit D:Due c:Set-Cat C:Filter-Cat \
                          f:Filter-Status /:Search r:Reset q:Quit";
pub const EMPTY_STORE: &str = "No todos yet. Press 'a' to add one.";
pub const NO_MATCHES: &str = "No matching todos found.";

const LIST_TOP: usize = 3;
const TEXT_COL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Header,
    Done,
    Overdue,
    DueSoon,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub col: usize,
    pub text: String,
    pub paint: Paint,
}

impl Span {
    fn new(col: usize, text: impl Into<String>, paint: Paint) -> Self {
        Self {
            col,
            text: text.into(),
            paint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub row: usize,
    pub spans: Vec<Span>,
    pub highlighted: bool,
}

impl Line {
    fn plain(row: usize, spans: Vec<Span>) -> Self {
        Self {
            row,
            spans,
            highlighted: false,
        }
    }

    /// The line as a string, spans placed at their columns.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            let width = out.width();
            if span.col > width {
                out.push_str(&" ".repeat(span.col - width));
            }
            out.push_str(&span.text);
        }
        out
    }
}

/// Where the cursor sits while a line is being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Prompt {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
    pub prompt: Option<Prompt>,
}

impl Frame {
    pub fn line_at(&self, row: usize) -> Option<&Line> {
        self.lines.iter().find(|line| line.row == row)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrameOptions {
    pub rows: usize,
    pub cols: usize,
    pub now: DateTime<Utc>,
    pub due_soon_days: i64,
}

pub fn frame(session: &Session, opts: &FrameOptions) -> Frame {
    let mut lines = vec![
        Line::plain(0, vec![Span::new(0, TITLE, Paint::Header)]),
        Line::plain(1, vec![Span::new(0, status_line(session), Paint::Plain)]),
    ];

    let height = opts.rows.saturating_sub(LIST_TOP + 2);
    match session.visibility() {
        Visibility::StoreEmpty => {
            lines.push(Line::plain(LIST_TOP, vec![Span::new(0, EMPTY_STORE, Paint::Plain)]))
        }
        Visibility::NoMatches => {
            lines.push(Line::plain(LIST_TOP, vec![Span::new(0, NO_MATCHES, Paint::Plain)]))
        }
        Visibility::Rows(rows) => {
            let selected = session.list().selected();
            let offset = scroll_offset(&rows, selected, height);
            for (slot, &index) in rows.iter().skip(offset).take(height).enumerate() {
                if let Some(todo) = session.list().get(index) {
                    lines.push(Line {
                        row: LIST_TOP + slot,
                        spans: todo_spans(todo, opts),
                        highlighted: selected == Some(index),
                    });
                }
            }
        }
    }

    let mut prompt = None;
    if let Mode::Capturing(purpose) = session.mode() {
        let row = opts.rows.saturating_sub(2);
        let text = purpose.prompt();
        lines.push(Line::plain(row, vec![Span::new(0, text, Paint::Plain)]));
        prompt = Some(Prompt {
            row,
            col: text.width().min(opts.cols),
        });
    }

    lines.push(Line::plain(
        opts.rows.saturating_sub(1),
        vec![Span::new(0, FOOTER, Paint::Plain)],
    ));

    Frame {
        lines: clip(lines, opts.rows, opts.cols),
        prompt,
    }
}

fn status_line(session: &Session) -> String {
    let filters = session.filters();
    format!(
        "Filter: {} | Status: {} | Search: {}",
        filters.category().unwrap_or("All"),
        filters.status().label(),
        filters.search().unwrap_or("None")
    )
}

/// First visible row to draw so that the selected row lands inside `height`.
fn scroll_offset(rows: &[usize], selected: Option<usize>, height: usize) -> usize {
    let position = selected.and_then(|s| rows.iter().position(|&i| i == s));
    match position {
        Some(p) if height > 0 && p >= height => p + 1 - height,
        _ => 0,
    }
}

fn todo_spans(todo: &Todo, opts: &FrameOptions) -> Vec<Span> {
    let marker = if todo.is_done() { "[X] " } else { "[ ] " };
    let mut spans = vec![Span::new(0, marker, Paint::Plain)];

    let mut right_edge = opts.cols;
    let mut due_span = None;
    if let Some(due) = todo.due_date() {
        let date = format_due(due);
        let col = opts.cols.saturating_sub(date.width() + 1);
        let paint = match urgency(due, opts.now, opts.due_soon_days) {
            Urgency::Overdue => Paint::Overdue,
            Urgency::DueSoon => Paint::DueSoon,
            Urgency::Later => Paint::Plain,
        };
        right_edge = col.saturating_sub(1);
        due_span = Some(Span::new(col, date, paint));
    }

    let text_paint = if todo.is_done() {
        Paint::Done
    } else {
        Paint::Plain
    };
    let text = truncate_to_width(todo.text(), right_edge.saturating_sub(TEXT_COL));
    let category_col = TEXT_COL + text.width() + 1;
    spans.push(Span::new(TEXT_COL, text, text_paint));

    if !todo.category().is_empty() {
        let label = format!("({})", todo.category());
        let label = truncate_to_width(&label, right_edge.saturating_sub(category_col));
        if !label.is_empty() {
            spans.push(Span::new(category_col, label, Paint::Category));
        }
    }

    spans.extend(due_span);
    spans
}

fn clip(lines: Vec<Line>, rows: usize, cols: usize) -> Vec<Line> {
    lines
        .into_iter()
        .filter(|line| line.row < rows)
        .map(|mut line| {
            line.spans.retain(|span| span.col < cols);
            for span in &mut line.spans {
                span.text = truncate_to_width(&span.text, cols - span.col);
            }
            line
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width - 1 {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
