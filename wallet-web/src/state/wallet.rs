//! Wallet state management

use leptos::prelude::*;

/// The wallet the connection library reported as connected.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectedWallet {
    pub connector_index: usize,
    pub name: String,
    pub address: String,
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<Option<ConnectedWallet>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(None),
        }
    }

    pub fn connector_index(&self) -> Option<usize> {
        self.wallet.with_untracked(|wallet| wallet.as_ref().map(|w| w.connector_index))
    }

    pub fn set_connected(&self, connector_index: usize, name: String, address: String) {
        self.wallet.set(Some(ConnectedWallet {
            connector_index,
            name,
            address,
        }));
    }

    pub fn disconnect(&self) {
        self.wallet.set(None);
    }
}

/// Set once the user asked for the install links; shared by every panel.
#[derive(Clone, Copy)]
pub struct DownloadClick(pub RwSignal<bool>);

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    provide_context(DownloadClick(RwSignal::new(false)));
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

pub fn use_download_click() -> DownloadClick {
    expect_context::<DownloadClick>()
}
