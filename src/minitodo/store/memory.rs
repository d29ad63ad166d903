use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::io;

/// Keeps the "persisted" todos in memory. Can be told to fail, to exercise
/// the error-absorbing paths.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
    fail: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// A store whose every load and save fails with an I/O error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            return Err(TodoError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store unavailable",
            )));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, capacity: usize) -> Result<Vec<Todo>> {
        self.check()?;
        Ok(self.todos.iter().take(capacity).cloned().collect())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.check()?;
        self.todos = todos.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_respects_capacity() {
        let store = InMemoryStore::with_todos(vec![Todo::new("a"), Todo::new("b")]);
        assert_eq!(store.load(1).unwrap(), vec![Todo::new("a")]);
    }

    #[test]
    fn save_replaces_contents() {
        let mut store = InMemoryStore::with_todos(vec![Todo::new("a")]);
        store.save(&[Todo::new("b")]).unwrap();
        assert_eq!(store.todos(), &[Todo::new("b")]);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn failing_store_errors() {
        let mut store = InMemoryStore::failing();
        assert!(store.load(10).is_err());
        assert!(store.save(&[]).is_err());
    }
}
