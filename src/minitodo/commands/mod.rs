//! # Command Layer
//!
//! One module per mutation of the [`TodoList`](crate::list::TodoList). Each
//! exposes a `run` function that applies the change and reports an [`Outcome`].
//!
//! Rejected input never turns into an error: empty text, a full list, an index
//! out of range or an unparsable date all leave the list untouched and come
//! back as [`Outcome::Ignored`]. Nothing shows that to the user; it exists so
//! callers and tests can tell a no-op from a change.

use tracing::debug;

pub mod category;
pub mod create;
pub mod delete;
pub mod due;
pub mod edit;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    EmptyInput,
    CapacityReached,
    NoSuchIndex,
    InvalidDate,
    NotCapturing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(Reason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

pub(crate) fn ignored(operation: &'static str, reason: Reason) -> Outcome {
    debug!(operation, ?reason, "operation ignored");
    Outcome::Ignored(reason)
}
