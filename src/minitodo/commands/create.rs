use crate::commands::{ignored, Outcome, Reason};
use crate::list::TodoList;
use crate::model::Todo;

/// Appends a pending, uncategorized todo and selects it.
pub fn run(list: &mut TodoList, text: &str) -> Outcome {
    if text.is_empty() {
        return ignored("create", Reason::EmptyInput);
    }
    if list.is_full() {
        return ignored("create", Reason::CapacityReached);
    }

    list.push(Todo::new(text));
    Outcome::Applied
}
