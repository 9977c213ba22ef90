#![allow(warnings)]
//! Projectly Frontend Entry Point

mod api;
mod app;
mod board;
mod calendar;
mod components;
mod config;
mod gantt;
mod lifecycle;
mod models;
mod pages;
mod recent;
mod store;
mod tasks;
mod upload;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A second init only fails if a logger is already installed
    let _ = console_log::init_with_level(level);
    log::info!("[APP] Projectly starting, API at {}", config::api_base_url());
    mount_to_body(App);
}
