//! App Header Component
//!
//! Page title and the button cycling through user filters.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<AppConfig>();
    let store = ctx.store;

    view! {
        <header>
            <h1>"Todo List"</h1>
            <button
                class="image-button"
                aria-label=move || store.current_user().get().next_label()
                on:click=move |_| ctx.cycle_user()
            >
                <img src=config.user_icon alt="Book" />
                {move || store.current_user().get().label()}
            </button>
        </header>
    }
}
