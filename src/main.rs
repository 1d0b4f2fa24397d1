//! Student Information System Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use sis_core::Config;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_build_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] Starting, API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
