//! Browser implementation of [`WalletHost`]
//!
//! Connects the panel state to the injected wallet providers, `localStorage`,
//! the toaster, `gtag` and the parent's mode-switch callback.

use leptos::prelude::*;
use shared::error::ConnectError;
use shared::events::{AnalyticsEvent, Notification};
use shared::wallet::{ConnectorInfo, WalletMode};
use shared::{ConnectPanel, WalletHost};

use crate::services::{analytics, storage, wallet};
use crate::state::panel::PanelContext;
use crate::state::toast::ToastContext;
use crate::state::wallet::{DownloadClick, WalletContext};

#[derive(Clone, Copy)]
pub struct BrowserHost {
    pub panel: RwSignal<ConnectPanel>,
    wallet: WalletContext,
    toasts: ToastContext,
    download: DownloadClick,
    storage_key: StoredValue<String>,
    on_mode: Option<Callback<WalletMode>>,
}

impl BrowserHost {
    pub fn new(
        state: PanelContext,
        wallet: WalletContext,
        toasts: ToastContext,
        download: DownloadClick,
        on_mode: Option<Callback<WalletMode>>,
    ) -> Self {
        Self {
            panel: state.panel,
            wallet,
            toasts,
            download,
            storage_key: state.storage_key,
            on_mode,
        }
    }
}

impl WalletHost for BrowserHost {
    fn connectors(&self) -> Vec<ConnectorInfo> {
        wallet::connectors()
    }

    fn connect(&self, index: usize) -> Result<(), ConnectError> {
        wallet::ensure_connector(index)?;
        let name = wallet::connectors()
            .into_iter()
            .nth(index)
            .map(|connector| connector.name)
            .unwrap_or_default();
        log::info!("Connecting to {}", name);

        let host = *self;
        leptos::task::spawn_local(async move {
            match wallet::connect_connector(index).await {
                Ok(address) => {
                    log::info!("{} connected: {}", name, address);
                    host.wallet.set_connected(index, name.clone(), address);
                    host.panel.update(|panel| panel.on_connected(&host, Some(&name)));
                }
                Err(err) => {
                    host.panel
                        .update(|panel| panel.on_connect_error(&host, Some(&name), &err));
                }
            }
        });
        Ok(())
    }

    fn disconnect(&self) {
        if let Some(index) = self.wallet.connector_index() {
            leptos::task::spawn_local(wallet::disconnect(index));
        }
        self.wallet.disconnect();
    }

    fn load_last_wallet(&self) -> Option<String> {
        self.storage_key.with_value(|key| storage::get(key))
    }

    fn store_last_wallet(&self, name: &str) {
        self.storage_key.with_value(|key| storage::set(key, name));
    }

    fn forget_last_wallet(&self) {
        self.storage_key.with_value(|key| storage::remove(key));
    }

    fn notify(&self, notification: Notification) {
        self.toasts.push(notification);
    }

    fn track(&self, event: AnalyticsEvent) {
        analytics::track(&event);
    }

    fn set_download_clicked(&self, clicked: bool) {
        self.download.0.set(clicked);
    }

    fn switch_mode(&self, mode: WalletMode) {
        if let Some(on_mode) = self.on_mode {
            on_mode.run(mode);
        }
    }
}
