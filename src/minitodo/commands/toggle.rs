use crate::commands::{ignored, Outcome, Reason};
use crate::list::TodoList;

pub fn run(list: &mut TodoList, index: usize) -> Outcome {
    match list.get_mut(index) {
        Some(todo) => {
            todo.toggle();
            Outcome::Applied
        }
        None => ignored("toggle", Reason::NoSuchIndex),
    }
}
