//! Reminders Frontend Entry Point

mod app;
mod board;
mod commands;
mod components;
mod context;
mod logging;
mod models;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
