//! UI Components
//!
//! Reusable Leptos components.

mod todo_form;
mod todo_list;
mod todo_panel;

pub use todo_form::ToDoForm;
pub use todo_list::ToDoList;
pub use todo_panel::ToDoPanel;
