//! Application Context
//!
//! Store, API client and audio cues provided via Leptos Context API,
//! plus the interaction handlers that tie them together.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::audio::CuePlayer;
use crate::config::AppConfig;
use crate::models::UserFilter;
use crate::store::{
    store_check_all, store_cycle_user, store_replace_tasks, store_set_search, store_toggle_task,
    AppState, AppStore,
};
use crate::sync;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    pub store: AppStore,
    api: HttpTodoApi,
    /// Audio elements live in the local arena; they are not `Send`
    cues: StoredValue<CuePlayer, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, config: &AppConfig) -> Self {
        Self {
            store,
            api: HttpTodoApi::new(config.api_base.clone()),
            cues: StoredValue::new_local(CuePlayer::new(&config.audio)),
        }
    }

    /// Fetch tasks for `filter` and replace the list when they arrive.
    pub fn load(&self, filter: UserFilter) {
        let store = self.store;
        sync::spawn_fetch(self.api.clone(), filter, move |tasks| {
            store_replace_tasks(&store, tasks);
        });
    }

    /// Toggle one task locally, then tell the server.
    pub fn toggle_task(&self, id: u32) {
        let toggled = store_toggle_task(&self.store, id);
        let Some(toggled) = toggled else {
            tracing::warn!(id, "toggle for unknown task");
            return;
        };
        self.cues.with_value(|cues| cues.play(toggled.cue));
        sync::spawn_update(self.api.clone(), toggled.update);
    }

    /// Complete every open task, one server update each.
    pub fn check_all(&self) {
        let checked = store_check_all(&self.store);
        let Some(checked) = checked else {
            return;
        };
        self.cues.with_value(|cues| cues.play(checked.cue));
        tracing::info!(count = checked.updates.len(), "checking all tasks");
        for update in checked.updates {
            sync::spawn_update(self.api.clone(), update);
        }
    }

    pub fn set_search(&self, text: String) {
        store_set_search(&self.store, text);
    }

    /// Advance the user filter; the fetch effect in `App` picks up the change.
    pub fn cycle_user(&self) {
        let next = store_cycle_user(&self.store);
        tracing::info!(user = u32::from(next), "switched user filter");
    }

    /// Release resources owned by the context.
    pub fn dispose(&self) {
        self.cues.with_value(CuePlayer::dispose);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Fresh store for a mounting app
pub fn new_app_store() -> AppStore {
    AppStore::new(AppState::new())
}
