//! Task Actions Component
//!
//! "Check All" button and the title search box.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskActions() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let check_all_ctx = ctx.clone();

    view! {
        <section class="task-actions-section">
            <button
                aria-label="Mark all tasks as completed"
                on:click=move |_| check_all_ctx.check_all()
            >
                "Check All"
            </button>
            <input
                type="text"
                class="search-bar"
                placeholder="Search tasks..."
                aria-label="Search for tasks"
                prop:value=move || store.search().get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
        </section>
    }
}
