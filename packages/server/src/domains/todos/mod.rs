//! Todos domain - the newsroom task board.

pub mod actions;
pub mod models;

pub use models::{NewTodo, TodoItem, TodoPriority};
