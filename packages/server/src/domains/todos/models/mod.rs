pub mod todo;

pub use todo::{NewTodo, TodoItem, TodoPriority};
