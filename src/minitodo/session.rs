//! # Interaction State Machine
//!
//! A [`Session`] owns the todo list, the filter configuration and the current
//! [`Mode`]. Drivers feed it decoded [`Command`]s while browsing and completed
//! lines while capturing; it never reads input itself.
//!
//! ```text
//!            a e D c C /                     submit(line)
//! Browsing ──────────────▶ Capturing(purpose) ─────────────▶ Browsing
//!    │  j k d space f r
//!    └──▶ Browsing
//!    │  q
//!    └──▶ Quit
//! ```
//!
//! The [`Step`] returned by [`Session::handle`] tells the driver whether to
//! read a line, keep going, or shut down. Which operation a captured line
//! feeds is decided by the [`CapturePurpose`] stored in the mode, so the
//! dispatch can be tested without a keyboard.
//!
//! ## Navigation
//!
//! With [`Navigation::Raw`] (the default) up/down move the selection by one
//! list index whether or not that item is visible under the current filters.
//! [`Navigation::Visible`] moves to the previous/next visible item instead and
//! stays put at either end.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::{self, Outcome, Reason};
use crate::filter::{visible, visible_indices, FilterConfig, Visibility};
use crate::list::TodoList;

/// A key press, already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Down,
    Up,
    Add,
    Delete,
    Toggle,
    Edit,
    SetDueDate,
    SetCategory,
    FilterCategory,
    CycleStatus,
    Search,
    Reset,
    Quit,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        let command = match c {
            'j' => Command::Down,
            'k' => Command::Up,
            'a' => Command::Add,
            'd' => Command::Delete,
            ' ' => Command::Toggle,
            'e' => Command::Edit,
            'D' => Command::SetDueDate,
            'c' => Command::SetCategory,
            'C' => Command::FilterCategory,
            'f' => Command::CycleStatus,
            '/' => Command::Search,
            'r' => Command::Reset,
            'q' => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// What a line being captured will be used for. Per-item purposes carry the
/// list index that was selected when capture began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePurpose {
    NewTodo,
    EditTodo(usize),
    SetCategory(usize),
    SetDueDate(usize),
    SetCategoryFilter,
    SetSearchTerm,
}

impl CapturePurpose {
    pub fn prompt(&self) -> &'static str {
        match self {
            CapturePurpose::NewTodo => "New todo: ",
            CapturePurpose::EditTodo(_) => "Edit todo: ",
            CapturePurpose::SetCategory(_) => "Category: ",
            CapturePurpose::SetDueDate(_) => "Due date (YYYY-MM-DD or blank to clear): ",
            CapturePurpose::SetCategoryFilter => "Filter by category (blank for all): ",
            CapturePurpose::SetSearchTerm => "Search: ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Capturing(CapturePurpose),
}

/// What the driver has to do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Capture(CapturePurpose),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    #[default]
    Raw,
    Visible,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    list: TodoList,
    filters: FilterConfig,
    mode: Mode,
    navigation: Navigation,
}

impl Session {
    pub fn new(list: TodoList, navigation: Navigation) -> Self {
        Self {
            list,
            filters: FilterConfig::default(),
            mode: Mode::Browsing,
            navigation,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TodoList {
        &mut self.list
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn visibility(&self) -> Visibility {
        visible(&self.list, &self.filters)
    }

    /// Applies a command received while browsing.
    ///
    /// While a capture is pending, commands are not interpreted and the
    /// pending capture is reported again.
    pub fn handle(&mut self, command: Command) -> Step {
        if let Mode::Capturing(purpose) = self.mode {
            return Step::Capture(purpose);
        }

        let selected = self.list.selected();
        match command {
            Command::Down => self.move_down(),
            Command::Up => self.move_up(),
            Command::Add => return self.begin_capture(CapturePurpose::NewTodo),
            Command::Delete => {
                if let Some(index) = selected {
                    commands::delete::run(&mut self.list, index);
                }
            }
            Command::Toggle => {
                if let Some(index) = selected {
                    commands::toggle::run(&mut self.list, index);
                }
            }
            Command::Edit => {
                if let Some(index) = selected {
                    return self.begin_capture(CapturePurpose::EditTodo(index));
                }
            }
            Command::SetDueDate => {
                if let Some(index) = selected {
                    return self.begin_capture(CapturePurpose::SetDueDate(index));
                }
            }
            Command::SetCategory => {
                if let Some(index) = selected {
                    return self.begin_capture(CapturePurpose::SetCategory(index));
                }
            }
            Command::FilterCategory => {
                return self.begin_capture(CapturePurpose::SetCategoryFilter)
            }
            Command::CycleStatus => self.cycle_status(),
            Command::Search => return self.begin_capture(CapturePurpose::SetSearchTerm),
            Command::Reset => self.filters.reset(),
            Command::Quit => return Step::Quit,
        }
        Step::Continue
    }

    /// Completes a pending capture with the line the user entered and returns
    /// to browsing.
    pub fn submit(&mut self, line: &str) -> Outcome {
        let Mode::Capturing(purpose) = self.mode else {
            return commands::ignored("submit", Reason::NotCapturing);
        };
        self.mode = Mode::Browsing;
        debug!(?purpose, "capture committed");

        match purpose {
            CapturePurpose::NewTodo => commands::create::run(&mut self.list, line),
            CapturePurpose::EditTodo(index) => commands::edit::run(&mut self.list, index, line),
            CapturePurpose::SetCategory(index) => {
                commands::category::run(&mut self.list, index, line)
            }
            CapturePurpose::SetDueDate(index) => commands::due::run(&mut self.list, index, line),
            CapturePurpose::SetCategoryFilter => {
                self.filters.set_category(line);
                self.list.reset_selection();
                Outcome::Applied
            }
            CapturePurpose::SetSearchTerm => {
                self.filters.set_search(line);
                self.list.reset_selection();
                Outcome::Applied
            }
        }
    }

    pub fn cycle_status(&mut self) {
        self.filters.cycle_status();
        self.list.reset_selection();
    }

    fn begin_capture(&mut self, purpose: CapturePurpose) -> Step {
        debug!(?purpose, "capture started");
        self.mode = Mode::Capturing(purpose);
        Step::Capture(purpose)
    }

    fn move_down(&mut self) {
        let Some(current) = self.list.selected() else {
            return;
        };
        match self.navigation {
            Navigation::Raw => self.list.select(current + 1),
            Navigation::Visible => {
                let rows = visible_indices(self.list.todos(), &self.filters);
                if let Some(&next) = rows.iter().find(|&&i| i > current) {
                    self.list.select(next);
                }
            }
        }
    }

    fn move_up(&mut self) {
        let Some(current) = self.list.selected() else {
            return;
        };
        match self.navigation {
            Navigation::Raw => self.list.select(current.saturating_sub(1)),
            Navigation::Visible => {
                let rows = visible_indices(self.list.todos(), &self.filters);
                if let Some(&prev) = rows.iter().rev().find(|&&i| i < current) {
                    self.list.select(prev);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StatusFilter;
    use crate::list::fixtures::ListFixture;

    fn session(list: TodoList) -> Session {
        Session::new(list, Navigation::Raw)
    }

    #[test]
    fn maps_keys_to_commands() {
        assert_eq!(Command::from_char('j'), Some(Command::Down));
        assert_eq!(Command::from_char('D'), Some(Command::SetDueDate));
        assert_eq!(Command::from_char('d'), Some(Command::Delete));
        assert_eq!(Command::from_char(' '), Some(Command::Toggle));
        assert_eq!(Command::from_char('/'), Some(Command::Search));
        assert_eq!(Command::from_char('x'), None);
    }

    #[test]
    fn add_captures_then_creates() {
        let mut s = session(TodoList::new());
        assert_eq!(s.handle(Command::Add), Step::Capture(CapturePurpose::NewTodo));
        assert_eq!(s.mode(), Mode::Capturing(CapturePurpose::NewTodo));

        assert!(s.submit("Buy milk").is_applied());
        assert_eq!(s.mode(), Mode::Browsing);
        assert_eq!(s.list().get(0).unwrap().text(), "Buy milk");
        assert_eq!(s.list().selected(), Some(0));
    }

    #[test]
    fn empty_add_returns_to_browsing() {
        let mut s = session(TodoList::new());
        s.handle(Command::Add);
        assert_eq!(s.submit(""), Outcome::Ignored(Reason::EmptyInput));
        assert_eq!(s.mode(), Mode::Browsing);
        assert!(s.list().is_empty());
    }

    #[test]
    fn item_commands_are_noops_on_empty_list() {
        let mut s = session(TodoList::new());
        for command in [
            Command::Delete,
            Command::Toggle,
            Command::Edit,
            Command::SetDueDate,
            Command::SetCategory,
            Command::Down,
            Command::Up,
        ] {
            assert_eq!(s.handle(command), Step::Continue);
            assert_eq!(s.mode(), Mode::Browsing);
        }
    }

    #[test]
    fn edit_targets_selection_at_capture_time() {
        let mut s = session(ListFixture::new().with_todos(3).selecting(1).build());
        assert_eq!(s.handle(Command::Edit), Step::Capture(CapturePurpose::EditTodo(1)));
        s.submit("Renamed");
        assert_eq!(s.list().get(1).unwrap().text(), "Renamed");
        assert_eq!(s.list().selected(), Some(1));
    }

    #[test]
    fn category_and_due_date_captures_dispatch() {
        let mut s = session(ListFixture::new().with_todo("t").build());
        s.handle(Command::SetCategory);
        s.submit("Work");
        assert_eq!(s.list().get(0).unwrap().category(), "Work");

        s.handle(Command::SetDueDate);
        assert!(s.submit("2030-05-06").is_applied());
        assert!(s.list().get(0).unwrap().due_date().is_some());

        s.handle(Command::SetDueDate);
        assert_eq!(s.submit("nonsense"), Outcome::Ignored(Reason::InvalidDate));
        assert!(s.list().get(0).unwrap().due_date().is_some());
    }

    #[test]
    fn commands_are_not_interpreted_while_capturing() {
        let mut s = session(ListFixture::new().with_todos(2).build());
        s.handle(Command::Search);
        assert_eq!(s.handle(Command::Delete), Step::Capture(CapturePurpose::SetSearchTerm));
        assert_eq!(s.list().len(), 2);
    }

    #[test]
    fn submit_without_capture_is_ignored() {
        let mut s = session(TodoList::new());
        assert_eq!(s.submit("x"), Outcome::Ignored(Reason::NotCapturing));
    }

    #[test]
    fn filter_captures_reset_selection() {
        let mut s = session(
            ListFixture::new()
                .with_categorized("a", "Work")
                .with_categorized("b", "Home")
                .build(),
        );
        assert_eq!(s.list().selected(), Some(1));
        s.handle(Command::FilterCategory);
        s.submit("work");
        assert_eq!(s.filters().category(), Some("work"));
        assert_eq!(s.list().selected(), Some(0));

        s.list_mut().select(1);
        s.handle(Command::Search);
        s.submit("b");
        assert_eq!(s.filters().search(), Some("b"));
        assert_eq!(s.list().selected(), Some(0));
    }

    #[test]
    fn status_cycle_resets_selection_every_step() {
        let mut s = session(ListFixture::new().with_todos(3).build());
        for expected in [StatusFilter::PendingOnly, StatusFilter::DoneOnly, StatusFilter::All] {
            s.list_mut().select(2);
            assert_eq!(s.handle(Command::CycleStatus), Step::Continue);
            assert_eq!(s.filters().status(), expected);
            assert_eq!(s.list().selected(), Some(0));
        }
    }

    #[test]
    fn reset_clears_filters_and_keeps_selection() {
        let mut s = session(ListFixture::new().with_todos(3).build());
        s.handle(Command::CycleStatus);
        s.handle(Command::Search);
        s.submit("Todo");
        s.list_mut().select(2);

        assert_eq!(s.handle(Command::Reset), Step::Continue);
        assert_eq!(s.filters(), &FilterConfig::default());
        assert_eq!(s.list().selected(), Some(2));
        assert_eq!(s.mode(), Mode::Browsing);
    }

    #[test]
    fn delete_and_toggle_act_on_selection() {
        let mut s = session(ListFixture::new().with_todos(3).selecting(1).build());
        s.handle(Command::Toggle);
        assert!(s.list().get(1).unwrap().is_done());
        s.handle(Command::Delete);
        let texts: Vec<&str> = s.list().todos().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["Todo 1", "Todo 3"]);
    }

    #[test]
    fn raw_navigation_ignores_filters() {
        let mut s = session(
            ListFixture::new()
                .with_todo("a")
                .with_done("b")
                .with_todo("c")
                .selecting(0)
                .build(),
        );
        s.handle(Command::CycleStatus); // pending only: rows 0 and 2
        s.handle(Command::Down);
        assert_eq!(s.list().selected(), Some(1));
    }

    #[test]
    fn raw_navigation_clamps_at_ends() {
        let mut s = session(ListFixture::new().with_todos(2).selecting(0).build());
        s.handle(Command::Up);
        assert_eq!(s.list().selected(), Some(0));
        s.handle(Command::Down);
        s.handle(Command::Down);
        assert_eq!(s.list().selected(), Some(1));
    }

    #[test]
    fn visible_navigation_skips_hidden_rows() {
        let list = ListFixture::new()
            .with_todo("a")
            .with_done("b")
            .with_todo("c")
            .selecting(0)
            .build();
        let mut s = Session::new(list, Navigation::Visible);
        s.handle(Command::CycleStatus);
        s.handle(Command::Down);
        assert_eq!(s.list().selected(), Some(2));
        s.handle(Command::Down);
        assert_eq!(s.list().selected(), Some(2));
        s.handle(Command::Up);
        assert_eq!(s.list().selected(), Some(0));
        s.handle(Command::Up);
        assert_eq!(s.list().selected(), Some(0));
    }

    #[test]
    fn quit_is_reported() {
        let mut s = session(TodoList::new());
        assert_eq!(s.handle(Command::Quit), Step::Quit);
    }
}
