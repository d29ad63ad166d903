//! # API Facade
//!
//! [`TodoApi`] is the single entry point a UI drives. It owns the storage
//! backend and the [`Session`], and adds the two things the session cannot
//! do on its own: loading at startup and saving at quit.
//!
//! ## Failure policy
//!
//! Persistence failures never reach the user. [`TodoApi::load`] falls back to
//! an empty list and [`TodoApi::save`] carries on as if the write happened;
//! both log what went wrong. [`TodoApi::try_load`] and [`TodoApi::try_save`]
//! expose the underlying `Result` for callers that care.
//!
//! ## Generic Over DataStore
//!
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use tracing::{info, warn};

use crate::commands::Outcome;
use crate::config::TodoConfig;
use crate::error::Result;
use crate::list::TodoList;
use crate::session::{Command, Session, Step};
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
    session: Session,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S, config: &TodoConfig) -> Self {
        let list = TodoList::with_capacity(config.max_todos);
        Self {
            store,
            session: Session::new(list, config.navigation),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the list with what the store holds.
    pub fn try_load(&mut self) -> Result<usize> {
        let list = self.session.list_mut();
        let todos = self.store.load(list.capacity())?;
        list.replace_all(todos);
        Ok(list.len())
    }

    /// Loads the persisted todos. On failure the list is left empty.
    pub fn load(&mut self) -> usize {
        match self.try_load() {
            Ok(count) => {
                info!(count, "todos loaded");
                count
            }
            Err(e) => {
                warn!(error = %e, "could not load todos, starting empty");
                self.session.list_mut().replace_all(Vec::new());
                0
            }
        }
    }

    pub fn try_save(&mut self) -> Result<()> {
        self.store.save(self.session.list().todos())
    }

    /// Persists the list. Returns whether the write succeeded; callers are
    /// free to ignore it.
    pub fn save(&mut self) -> bool {
        match self.try_save() {
            Ok(()) => {
                info!(count = self.session.list().len(), "todos saved");
                true
            }
            Err(e) => {
                warn!(error = %e, "could not save todos");
                false
            }
        }
    }

    /// Forwards a command to the session. Quitting saves first.
    pub fn handle(&mut self, command: Command) -> Step {
        let step = self.session.handle(command);
        if step == Step::Quit {
            self.save();
        }
        step
    }

    /// Completes a pending text capture.
    pub fn submit(&mut self, line: &str) -> Outcome {
        self.session.submit(line)
    }
}
