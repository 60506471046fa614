//! Remote Todo API
//!
//! Bindings to the JSONPlaceholder-style `/todos` collection.

mod http;

pub use http::HttpTodoApi;

use crate::error::ApiError;
use crate::models::{CompletionUpdate, Task, UserFilter};

/// Operations the app needs from the remote task collection.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// `GET /todos`, scoped to one user unless `filter` is "all".
    async fn fetch_tasks(&self, filter: UserFilter) -> Result<Vec<Task>, ApiError>;

    /// `PATCH /todos/{id}` with the new completion. Returns the echoed record.
    async fn update_completion(&self, update: CompletionUpdate) -> Result<serde_json::Value, ApiError>;
}

/// Collection URL for `filter`.
pub fn todos_url(base: &str, filter: UserFilter) -> String {
    match filter.user_id() {
        Some(user_id) => format!("{}/todos?userId={}", base, user_id),
        None => format!("{}/todos", base),
    }
}

/// URL of a single task.
pub fn todo_url(base: &str, id: u32) -> String {
    format!("{}/todos/{}", base, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_BASE;

    #[test]
    fn test_todos_url_all_users() {
        assert_eq!(
            todos_url(DEFAULT_API_BASE, UserFilter::ALL),
            "https://jsonplaceholder.typicode.com/todos"
        );
    }

    #[test]
    fn test_todos_url_scoped() {
        let filter = UserFilter::try_from(4).unwrap();
        assert_eq!(
            todos_url(DEFAULT_API_BASE, filter),
            "https://jsonplaceholder.typicode.com/todos?userId=4"
        );
    }

    #[test]
    fn test_todo_url() {
        assert_eq!(todo_url("http://localhost:3000", 17), "http://localhost:3000/todos/17");
    }
}
