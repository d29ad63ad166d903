use crate::commands::{ignored, Outcome, Reason};
use crate::list::TodoList;

/// Sets the category of a todo. Unlike editing text, empty input is applied
/// and clears the category.
pub fn run(list: &mut TodoList, index: usize, category: &str) -> Outcome {
    match list.get_mut(index) {
        Some(todo) => {
            todo.set_category(category);
            Outcome::Applied
        }
        None => ignored("category", Reason::NoSuchIndex),
    }
}
