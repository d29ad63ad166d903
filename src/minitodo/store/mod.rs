//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the session and wherever the
//! todos live between runs.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single binary file written with
//!   the [`codec`](crate::codec) layout (`.todos.dat` in the working directory
//!   by default)
//! - [`memory::InMemoryStore`]: keeps a copy in memory, for tests
//!
//! Stores return errors like any other I/O code. Absorbing them, so that a
//! missing or broken file simply means "start empty" and a failed save goes
//! unnoticed by the user, is the job of [`TodoApi`](crate::api::TodoApi).

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the persisted todos, keeping at most `capacity` of them.
    fn load(&self, capacity: usize) -> Result<Vec<Todo>>;

    /// Replace the persisted todos with `todos`.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;
}
