pub mod stored;
pub mod todo;

pub use stored::StoredTodo;
pub use todo::{Completion, Todo};
