//! Gantt View Frontend Entry Point

mod api;
mod app;
mod collection;
mod components;
mod filter;
mod message;
mod models;
mod query;
mod route;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
