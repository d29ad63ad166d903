use crate::commands::{ignored, Outcome, Reason};
use crate::dates::parse_due_date;
use crate::list::TodoList;

/// Sets or clears a due date from user input.
///
/// Empty input clears the date. Anything that does not parse as a real
/// calendar day leaves the current date in place.
pub fn run(list: &mut TodoList, index: usize, input: &str) -> Outcome {
    let Some(todo) = list.get_mut(index) else {
        return ignored("due", Reason::NoSuchIndex);
    };

    if input.is_empty() {
        todo.set_due_date(None);
        return Outcome::Applied;
    }

    match parse_due_date(input) {
        Some(due) => {
            todo.set_due_date(Some(due));
            Outcome::Applied
        }
        None => ignored("due", Reason::InvalidDate),
    }
}
