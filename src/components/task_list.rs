//! Task List Component
//!
//! Renders the filtered, incomplete-first view of the store.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::tasks::visible_tasks;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| visible_tasks(&store.tasks().read(), &store.search().read()));

    view! {
        <section class="task-list-section">
            <ul class="task-list">
                <For
                    each=move || visible.get()
                    // completion is part of the key so toggled rows re-render
                    key=|task| (task.id, task.completed)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>
            <p class="task-count">
                {move || format!("{} of {} tasks", visible.with(Vec::len), store.tasks().read().len())}
            </p>
        </section>
    }
}
