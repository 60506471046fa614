//! Remote Sync
//!
//! Detached fetch and update calls. Outcomes are logged only: a failed fetch
//! leaves the list as it was, a failed update leaves the optimistic local
//! change in place. Nothing is cancelled, so when fetches overlap the one
//! that resolves last wins.

use leptos::task::spawn_local;

use crate::api::TodoApi;
use crate::models::{CompletionUpdate, Task, UserFilter};

/// Fetch the list for `filter`. `None` on failure, after logging it.
pub async fn load_tasks<A: TodoApi>(api: &A, filter: UserFilter) -> Option<Vec<Task>> {
    match api.fetch_tasks(filter).await {
        Ok(tasks) => {
            tracing::info!(user = u32::from(filter), count = tasks.len(), "loaded tasks");
            Some(tasks)
        }
        Err(err) => {
            tracing::error!(user = u32::from(filter), error = %err, "error fetching tasks");
            None
        }
    }
}

/// Send one completion change and log how it went. Failures are not retried
/// and the local change is kept either way.
pub async fn push_completion<A: TodoApi>(api: &A, update: CompletionUpdate) {
    match api.update_completion(update).await {
        Ok(echo) => {
            tracing::debug!(id = update.id, completed = update.completed, response = %echo, "task updated");
        }
        Err(err) => {
            tracing::error!(id = update.id, completed = update.completed, error = %err, "error updating task");
        }
    }
}

/// Fetch in the background and hand the list to `apply` if it arrives.
pub fn spawn_fetch<A, F>(api: A, filter: UserFilter, apply: F)
where
    A: TodoApi + 'static,
    F: FnOnce(Vec<Task>) + 'static,
{
    spawn_local(async move {
        if let Some(tasks) = load_tasks(&api, filter).await {
            apply(tasks);
        }
    });
}

/// Fire-and-forget completion update.
pub fn spawn_update<A: TodoApi + 'static>(api: A, update: CompletionUpdate) {
    spawn_local(async move { push_completion(&api, update).await });
}
