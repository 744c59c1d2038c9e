//! Connect Wallet Panel - wallet buttons, retry row and install prompt
//!
//! Rendering only: every decision is made by [`ConnectPanel`](shared::ConnectPanel),
//! which the view reads through the app-level [`PanelContext`] and drives with
//! [`BrowserHost`].

use leptos::prelude::*;
use shared::panel::{download_prompt, PanelStatus};
use shared::wallet::{short_address, WalletMode, WALLET_OPTIONS};

use crate::services::host::BrowserHost;
use crate::state::panel::use_panel_context;
use crate::state::toast::use_toast_context;
use crate::state::wallet::{use_download_click, use_wallet_context};

#[component]
pub fn ConnectPanelView(
    /// Called with [`WalletMode::Download`] when the install link is clicked
    #[prop(optional, into)]
    set_wallet_type: Option<Callback<WalletMode>>,
) -> impl IntoView {
    let state = use_panel_context();
    let wallet_ctx = use_wallet_context();
    let download = use_download_click();

    let panel = state.panel;
    let host = BrowserHost::new(
        state,
        wallet_ctx,
        use_toast_context(),
        download,
        set_wallet_type,
    );

    // Auto-reconnect; the panel ignores repeat calls
    Effect::new(move || {
        panel.update(|panel| panel.mount(&host));
    });

    let status = Memo::new(move |_| panel.with(|panel| panel.status()));

    let buttons = WALLET_OPTIONS
        .into_iter()
        .enumerate()
        .map(move |(index, option)| {
            let class = if index == 0 {
                "wallet-button wallet-button-wide"
            } else {
                "wallet-button"
            };
            view! {
                <button
                    class=class
                    disabled=move || status.get() == PanelStatus::Connecting
                    on:click=move |_| panel.update(|panel| panel.select(&host, index))
                >
                    <img class="wallet-icon" src=option.icon_path alt=option.display_name/>
                    <span class="wallet-label">
                        {move || if panel.with(|panel| panel.is_pending(index)) {
                            view! {
                                <span class="spinner"></span>
                                "Connecting..."
                            }.into_any()
                        } else {
                            view! { {option.display_name} }.into_any()
                        }}
                    </span>
                </button>
            }
        })
        .collect_view();

    let status_row = move || match status.get() {
        PanelStatus::Connected(name) => {
            let address = wallet_ctx
                .wallet
                .with(|wallet| wallet.as_ref().map(|w| short_address(&w.address, 4)))
                .unwrap_or_default();
            view! {
                <div class="connected">
                    <span class="wallet-name">{name}</span>
                    <span class="wallet-address">{address}</span>
                    <button
                        class="wallet-button disconnect-button"
                        on:click=move |_| panel.update(|panel| panel.disconnect(&host))
                    >
                        "Disconnect"
                    </button>
                </div>
            }
            .into_any()
        }
        PanelStatus::Failed => view! {
            <div class="retry-row">
                <span>"Connection failed. "</span>
                <button
                    class="wallet-button retry-button"
                    on:click=move |_| panel.update(|panel| panel.retry(&host))
                >
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
        PanelStatus::Idle | PanelStatus::Connecting => ().into_any(),
    };

    view! {
        <div class="connect-panel">
            <h4 class="panel-title">"Connect wallet"</h4>

            <div class="wallet-grid">{buttons}</div>

            {status_row}

            <div class="install-prompt">
                {move || download_prompt(download.0.get())}
                <span
                    class="install-link"
                    on:click=move |_| panel.with_untracked(|panel| panel.click_download(&host))
                >
                    "click here"
                </span>
            </div>
        </div>
    }
}
