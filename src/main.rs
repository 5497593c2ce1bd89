//! Pastebin Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod form;
mod handlers;
mod models;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("[APP] Starting, API base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
