//! Task Row Component
//!
//! One checkbox + title row.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id;
    let completed = task.completed;
    let label = format!(
        "Mark {} as {}",
        task.title,
        if completed { "incomplete" } else { "completed" }
    );

    view! {
        <li class=if completed { "completed" } else { "" }>
            <input
                type="checkbox"
                prop:checked=completed
                aria-label=label
                on:change=move |_| ctx.toggle_task(id)
            />
            <p>{task.title}</p>
        </li>
    }
}
