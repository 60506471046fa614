//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mutation
//! methods are plain Rust on `AppState`; they update local state and hand
//! back the side effects (server updates, audio cue) for the caller to run.
//!
//! Components go through the `store_*` helpers, which only write the fields
//! that changed. Writing the root would wake every field reader, including
//! the fetch effect keyed on `current_user`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::audio::Cue;
use crate::models::{CompletionUpdate, Task, UserFilter};
use crate::tasks;

/// Session state for the todo list
#[derive(Clone, Debug, PartialEq, Store)]
pub struct AppState {
    /// Tasks in fetch order
    pub tasks: Vec<Task>,
    /// Title filter typed by the user
    pub search: String,
    /// Cached `tasks.iter().all(completed)`
    pub all_checked: bool,
    /// Active user filter
    pub current_user: UserFilter,
}

/// Result of toggling a single task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    pub update: CompletionUpdate,
    pub cue: Cue,
}

/// Result of checking every task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedAll {
    /// One entry per task that was incomplete
    pub updates: Vec<CompletionUpdate>,
    pub cue: Cue,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            search: String::new(),
            all_checked: tasks::all_completed(&[]),
            current_user: UserFilter::ALL,
        }
    }

    /// Replace the whole list with freshly fetched tasks.
    pub fn replace_tasks(&mut self, fetched: Vec<Task>) {
        self.all_checked = tasks::all_completed(&fetched);
        self.tasks = fetched;
    }

    /// Flip one task's completion. `None` if no task has `id`.
    pub fn toggle_one(&mut self, id: u32) -> Option<Toggled> {
        let (next, completed) = tasks::with_toggled(&self.tasks, id)?;
        self.all_checked = tasks::all_completed(&next);
        self.tasks = next;
        Some(Toggled {
            update: CompletionUpdate { id, completed },
            cue: Cue::for_completion(completed),
        })
    }

    /// Mark every task completed. `None` when everything already is.
    pub fn check_all(&mut self) -> Option<CheckedAll> {
        if self.all_checked {
            return None;
        }
        let (next, changed) = tasks::with_all_completed(&self.tasks);
        self.tasks = next;
        self.all_checked = true;
        Some(CheckedAll {
            updates: changed
                .into_iter()
                .map(|id| CompletionUpdate { id, completed: true })
                .collect(),
            cue: Cue::Check,
        })
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
    }

    /// Move to the next user filter and return it.
    pub fn cycle_user(&mut self) -> UserFilter {
        self.current_user = self.current_user.next();
        self.current_user
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn store_write_tasks(store: &AppStore, state: AppState) {
    store.all_checked().set(state.all_checked);
    store.tasks().set(state.tasks);
}

/// Replace the task list with a fetch result
pub fn store_replace_tasks(store: &AppStore, fetched: Vec<Task>) {
    let mut state = store.get_untracked();
    state.replace_tasks(fetched);
    store_write_tasks(store, state);
}

/// Toggle one task in the store
pub fn store_toggle_task(store: &AppStore, id: u32) -> Option<Toggled> {
    let mut state = store.get_untracked();
    let toggled = state.toggle_one(id)?;
    store_write_tasks(store, state);
    Some(toggled)
}

/// Complete every open task in the store
pub fn store_check_all(store: &AppStore) -> Option<CheckedAll> {
    let mut state = store.get_untracked();
    let checked = state.check_all()?;
    store_write_tasks(store, state);
    Some(checked)
}

pub fn store_set_search(store: &AppStore, text: String) {
    store.search().set(text);
}

/// Advance the user filter in the store and return it
pub fn store_cycle_user(store: &AppStore) -> UserFilter {
    let next = store.current_user().get_untracked().next();
    store.current_user().set(next);
    next
}
