//! Pencil Todo Frontend Entry Point

mod api;
mod app;
mod audio;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;
mod sync;
mod tasks;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting todo list frontend");
    mount_to_body(|| view! { <App /> });
}
