//! Wallet connect panel for EVM browser wallets
//!
//! Renders the wallet buttons, reconnects to the last used wallet and reports
//! results through toasts and analytics. Panel decisions live in the `shared`
//! crate; this crate is the browser shell around them.

use leptos::prelude::*;
use shared::events::AnalyticsEvent;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet connect panel starting...");

    services::analytics::track(&AnalyticsEvent::invitation());

    leptos::mount::mount_to_body(|| view! { <App/> });
}
