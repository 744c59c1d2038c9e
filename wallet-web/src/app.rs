//! Wallet Connect Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Toaster;
use crate::pages::WalletPage;
use crate::services::config::load_config;
use crate::state::panel::provide_panel_context;
use crate::state::toast::provide_toast_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    provide_toast_context(config.toast_duration_ms);
    provide_wallet_context();
    provide_panel_context(&config);

    view! {
        <Router>
            <div class="app-container">
                <Toaster/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=WalletPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="connect-panel">
            <h4 class="panel-title">"404 - Page Not Found"</h4>
            <A href="/">
                <span class="wallet-button">"Connect a wallet"</span>
            </A>
        </div>
    }
}
