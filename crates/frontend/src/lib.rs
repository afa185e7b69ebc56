pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod usecases;

use contracts::shared::config::{load_config, Config};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = load_config().unwrap_or_else(|e| {
        log::error!("Embedded configuration is invalid, using defaults: {}", e);
        Config::default()
    });
    log::info!("Portfolio starting, email endpoint {}", config.email.endpoint);

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
