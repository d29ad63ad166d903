use crate::commands::{ignored, Outcome, Reason};
use crate::list::TodoList;

pub fn run(list: &mut TodoList, index: usize) -> Outcome {
    if index >= list.len() {
        return ignored("delete", Reason::NoSuchIndex);
    }

    list.remove(index);
    Outcome::Applied
}
