//! # Filtering and Search
//!
//! [`FilterConfig`] holds the three independent constraints of a session:
//!
//! - **status**: all, pending only, or done only, cycled in that order
//! - **category**: exact, case-insensitive match on the todo's category
//! - **search**: case-insensitive substring of the text *or* the category
//!
//! A todo is visible when it passes all three. [`visible`] walks the list in
//! order and is recomputed on every draw; nothing is cached.
//!
//! Because every constraint only ever removes indexes, adding a constraint can
//! shrink the visible set but never grow it.

use crate::list::TodoList;
use crate::model::{bounded, Todo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    PendingOnly,
    DoneOnly,
}

impl StatusFilter {
    /// All → PendingOnly → DoneOnly → All.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::PendingOnly,
            StatusFilter::PendingOnly => StatusFilter::DoneOnly,
            StatusFilter::DoneOnly => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::PendingOnly => "Pending",
            StatusFilter::DoneOnly => "Done",
        }
    }

    fn admits(self, done: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::PendingOnly => !done,
            StatusFilter::DoneOnly => done,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    category: Option<String>,
    status: StatusFilter,
    search: Option<String>,
}

impl FilterConfig {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Empty input removes the category constraint.
    pub fn set_category(&mut self, input: &str) {
        self.category = non_empty(input);
    }

    /// Empty input removes the search constraint.
    pub fn set_search(&mut self, input: &str) {
        self.search = non_empty(input);
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn cycle_status(&mut self) {
        self.status = self.status.next();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.search.is_some() || self.status != StatusFilter::All
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        if !self.status.admits(todo.is_done()) {
            return false;
        }

        if let Some(category) = &self.category {
            if todo.category().to_lowercase() != category.to_lowercase() {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !todo.text().to_lowercase().contains(&term)
                && !todo.category().to_lowercase().contains(&term)
            {
                return false;
            }
        }

        true
    }
}

fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(bounded(input))
    }
}

/// The result of filtering a list.
///
/// An empty list and a list whose every item is filtered out are reported
/// separately so the view can say which one happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    StoreEmpty,
    NoMatches,
    Rows(Vec<usize>),
}

impl Visibility {
    pub fn indices(&self) -> &[usize] {
        match self {
            Visibility::Rows(rows) => rows,
            _ => &[],
        }
    }
}

pub fn visible(list: &TodoList, filters: &FilterConfig) -> Visibility {
    if list.is_empty() {
        return Visibility::StoreEmpty;
    }
    let rows = visible_indices(list.todos(), filters);
    if rows.is_empty() {
        Visibility::NoMatches
    } else {
        Visibility::Rows(rows)
    }
}

pub fn visible_indices(todos: &[Todo], filters: &FilterConfig) -> Vec<usize> {
    todos
        .iter()
        .enumerate()
        .filter(|(_, todo)| filters.matches(todo))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::fixtures::ListFixture;

    fn sample() -> TodoList {
        ListFixture::new()
            .with_categorized("Write report", "Work")
            .with_categorized("Buy milk", "home")
            .with_categorized("Call boss", "work")
            .with_todo("Read book")
            .build()
    }

    #[test]
    fn unfiltered_shows_everything_in_order() {
        let list = sample();
        assert_eq!(visible(&list, &FilterConfig::default()), Visibility::Rows(vec![0, 1, 2, 3]));
    }

    #[test]
    fn empty_store_is_distinct_from_no_matches() {
        let empty = TodoList::new();
        assert_eq!(visible(&empty, &FilterConfig::default()), Visibility::StoreEmpty);

        let list = ListFixture::new().with_todo("Buy milk").build();
        let mut filters = FilterConfig::default();
        filters.set_status(StatusFilter::DoneOnly);
        assert_eq!(visible(&list, &filters), Visibility::NoMatches);
    }

    #[test]
    fn category_filter_is_case_insensitive_exact() {
        let list = sample();
        let mut filters = FilterConfig::default();
        filters.set_category("WORK");
        assert_eq!(visible(&list, &filters), Visibility::Rows(vec![0, 2]));

        filters.set_category("wor");
        assert_eq!(visible(&list, &filters), Visibility::NoMatches);
    }

    #[test]
    fn search_matches_text_or_category() {
        let list = sample();
        let mut filters = FilterConfig::default();
        filters.set_search("MILK");
        assert_eq!(visible(&list, &filters), Visibility::Rows(vec![1]));

        filters.set_search("ork");
        assert_eq!(visible(&list, &filters), Visibility::Rows(vec![0, 2]));
    }

    #[test]
    fn status_filter_splits_done_and_pending() {
        let list = ListFixture::new()
            .with_todo("a")
            .with_done("b")
            .with_todo("c")
            .build();
        let mut filters = FilterConfig::default();
        filters.cycle_status();
        assert_eq!(filters.status(), StatusFilter::PendingOnly);
        assert_eq!(visible(&list, &filters), Visibility::Rows(vec![0, 2]));
        filters.cycle_status();
        assert_eq!(visible(&list, &filters), Visibility::Rows(vec![1]));
    }

    #[test]
    fn status_cycle_has_period_three() {
        let mut filters = FilterConfig::default();
        for _ in 0..3 {
            filters.cycle_status();
        }
        assert_eq!(filters.status(), StatusFilter::All);
    }

    #[test]
    fn constraints_combine() {
        let mut list = sample();
        crate::commands::toggle::run(&mut list, 2);
        let mut filters = FilterConfig::default();
        filters.set_category("work");
        filters.set_status(StatusFilter::PendingOnly);
        assert_eq!(visible(&list, &filters), Visibility::Rows(vec![0]));
    }

    #[test]
    fn reset_clears_everything_and_is_idempotent() {
        let mut filters = FilterConfig::default();
        filters.set_category("Work");
        filters.set_search("x");
        filters.cycle_status();
        assert!(filters.is_active());

        filters.reset();
        let once = filters.clone();
        filters.reset();
        assert_eq!(filters, once);
        assert_eq!(filters, FilterConfig::default());
        assert!(!filters.is_active());
    }

    #[test]
    fn empty_input_clears_constraint() {
        let mut filters = FilterConfig::default();
        filters.set_search("milk");
        filters.set_search("");
        assert_eq!(filters.search(), None);
    }
}
