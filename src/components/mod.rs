//! UI Components
//!
//! Reusable Leptos components.

mod add_todo_form;
mod status_selector;
mod todo_list;

pub use add_todo_form::AddTodoForm;
pub use status_selector::{StatusSelector, STATUS_OPTIONS};
pub use todo_list::TodoList;
