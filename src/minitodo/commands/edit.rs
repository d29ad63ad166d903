use crate::commands::{ignored, Outcome, Reason};
use crate::list::TodoList;

/// Replaces the text of a todo. Empty input cancels the edit.
pub fn run(list: &mut TodoList, index: usize, text: &str) -> Outcome {
    if text.is_empty() {
        return ignored("edit", Reason::EmptyInput);
    }
    match list.get_mut(index) {
        Some(todo) => {
            todo.set_text(text);
            Outcome::Applied
        }
        None => ignored("edit", Reason::NoSuchIndex),
    }
}
