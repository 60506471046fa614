//! UI Components
//!
//! Leptos components making up the todo list page.

mod app_header;
mod task_actions;
mod task_list;
mod task_row;

pub use app_header::AppHeader;
pub use task_actions::TaskActions;
pub use task_list::TaskList;
pub use task_row::TaskRow;
