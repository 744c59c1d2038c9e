//! Install links for every supported wallet

use leptos::prelude::*;
use shared::wallet::{WalletMode, WALLET_OPTIONS};

#[component]
pub fn DownloadPanel(
    #[prop(optional, into)] set_wallet_type: Option<Callback<WalletMode>>,
) -> impl IntoView {
    let links = WALLET_OPTIONS
        .into_iter()
        .map(|option| {
            view! {
                <a
                    class="wallet-button"
                    href=option.install_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <img class="wallet-icon" src=option.icon_path alt=option.display_name/>
                    <span class="wallet-label">{option.display_name}</span>
                </a>
            }
        })
        .collect_view();

    let back = move |_: leptos::ev::MouseEvent| {
        if let Some(set_wallet_type) = set_wallet_type {
            set_wallet_type.run(WalletMode::Connect);
        }
    };

    view! {
        <div class="connect-panel">
            <h4 class="panel-title">"Install a wallet"</h4>
            <div class="wallet-grid">{links}</div>
            <div class="install-prompt">
                <span class="install-link" on:click=back>"Back to connect"</span>
            </div>
        </div>
    }
}
