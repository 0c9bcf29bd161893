//! CRUD Demo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod page_state;
mod pages;
mod query;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Debug) {
        leptos::logging::warn!("logger already installed: {}", e);
    }
    log::info!(target: "app", "starting CRUD demo");
    mount_to_body(App);
}
