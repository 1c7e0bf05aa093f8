//! Portfolio Frontend Entry Point

mod models;
mod config;
mod error;
mod commands;
mod context;
mod store;
mod modal;
mod nav;
mod reveal;
mod contact;
mod observe;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    // Configuration decides where the collections live, so it loads first
    spawn_local(async {
        let config = commands::load_site_config().await;
        log::info!("Mounting portfolio for {}", config.owner);
        mount_to_body(move || view! { <App config=config.clone() /> });
    });
}
