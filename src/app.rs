//! Todo List App
//!
//! Root component: owns the store, the API client and the audio cues for
//! as long as it is mounted.

use leptos::prelude::*;

use crate::components::{AppHeader, TaskActions, TaskList};
use crate::config::AppConfig;
use crate::context::{new_app_store, AppContext};
use crate::store::AppStateStoreFields;

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store = new_app_store();
    let ctx = AppContext::new(store, &config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx.clone());
    provide_context(config);

    // Load tasks on mount and whenever the user filter changes
    let current_user = Memo::new(move |_| store.current_user().get());
    let loader = ctx.clone();
    Effect::new(move |_| {
        let filter = current_user.get();
        tracing::info!(user = u32::from(filter), "loading tasks");
        loader.load(filter);
    });

    on_cleanup(move || ctx.dispose());

    view! {
        <div class="App">
            <AppHeader />
            <main>
                <TaskActions />
                <TaskList />
            </main>
        </div>
    }
}
