//! Wallet Page - switches between the connect panel and the install links

use leptos::prelude::*;
use shared::wallet::WalletMode;

use crate::components::{ConnectPanelView, DownloadPanel};

#[component]
pub fn WalletPage() -> impl IntoView {
    let (mode, set_mode) = signal(WalletMode::Connect);
    let set_wallet_type = Callback::new(move |next: WalletMode| {
        log::debug!("Wallet popover mode -> {:?}", next);
        set_mode.set(next);
    });

    view! {
        <div class="wallet-popover">
            {move || match mode.get() {
                WalletMode::Connect => view! {
                    <ConnectPanelView set_wallet_type=set_wallet_type/>
                }.into_any(),
                WalletMode::Download => view! {
                    <DownloadPanel set_wallet_type=set_wallet_type/>
                }.into_any(),
            }}
        </div>
    }
}
