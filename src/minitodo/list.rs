//! # The Todo List
//!
//! [`TodoList`] is the in-memory store: an ordered, capacity-bounded sequence of
//! [`Todo`]s plus the selection cursor.
//!
//! ## Selection
//!
//! The selection is an index into the list itself, not into the filtered view.
//! While the list is non-empty it always lies in `0..len`; on an empty list
//! [`TodoList::selected`] returns `None`.
//!
//! ## Deletion
//!
//! Removing an item shifts every later item one slot to the left, so survivors
//! keep their relative order. Afterwards the selection is stepped back by one
//! if it fell off the end. It is not re-pointed at a meaningful neighbour.

use crate::model::{Todo, MAX_TODOS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    selected: usize,
    capacity: usize,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TODOS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            capacity,
        }
    }

    /// Builds a list from already-decoded todos. Anything past `capacity` is dropped.
    pub fn from_todos(mut todos: Vec<Todo>, capacity: usize) -> Self {
        todos.truncate(capacity);
        Self {
            items: todos,
            selected: 0,
            capacity,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Todo> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn selected(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.selected.min(self.items.len() - 1))
        }
    }

    /// Moves the selection, clamping it into range. No-op on an empty list.
    pub fn select(&mut self, index: usize) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.selected = index.min(last);
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    /// Replaces every item, as when loading from disk.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.items = todos;
        self.items.truncate(self.capacity);
        self.selected = 0;
    }

    pub(crate) fn push(&mut self, todo: Todo) {
        self.items.push(todo);
        self.selected = self.items.len() - 1;
    }

    pub(crate) fn remove(&mut self, index: usize) -> Todo {
        let removed = self.items.remove(index);
        if self.selected >= self.items.len() && self.selected > 0 {
            self.selected -= 1;
        }
        removed
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, Utc};

    pub struct ListFixture {
        pub list: TodoList,
    }

    impl Default for ListFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ListFixture {
        pub fn new() -> Self {
            Self {
                list: TodoList::new(),
            }
        }

        pub fn with_capacity(capacity: usize) -> Self {
            Self {
                list: TodoList::with_capacity(capacity),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.list.push(Todo::new(&format!("Todo {}", i + 1)));
            }
            self
        }

        pub fn with_todo(mut self, text: &str) -> Self {
            self.list.push(Todo::new(text));
            self
        }

        pub fn with_categorized(mut self, text: &str, category: &str) -> Self {
            self.list.push(Todo::from_parts(text, category, None, false));
            self
        }

        pub fn with_done(mut self, text: &str) -> Self {
            self.list.push(Todo::from_parts(text, "", None, true));
            self
        }

        pub fn with_due(mut self, text: &str, due: DateTime<Utc>) -> Self {
            self.list.push(Todo::from_parts(text, "", Some(due), false));
            self
        }

        pub fn selecting(mut self, index: usize) -> Self {
            self.list.select(index);
            self
        }

        pub fn build(self) -> TodoList {
            self.list
        }
    }
}
