//! # Connect Panel State
//!
//! [`ConnectPanel`] holds the transient UI state of the wallet connect panel
//! and reacts to the connection library's callbacks. Everything outside the
//! panel (the library, durable storage, toasts, analytics, the shared
//! download flag and the parent's mode switch) is reached through the
//! [`WalletHost`] trait, so the same state drives the browser frontend and the
//! unit tests.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──select/mount──► Connecting ──on_connected──► Connected
//!                            │
//!                            ├──on_connect_error──► Idle (buttons re-enabled)
//!                            └──connect() failed──► Failed (retry available)
//! ```
//!
//! Only one automatic attempt is ever made (on mount). Every other attempt is
//! started by the user, either from a wallet button or from the retry button.

use crate::error::{describe_error, normalize_wallet_key, ConnectError};
use crate::events::{AnalyticsEvent, Notification};
use crate::wallet::{find_connector, ConnectorInfo, WalletMode, WALLET_OPTIONS};

pub const RECONNECTING_MESSAGE: &str = "Reconnecting to your last wallet...";
pub const CONNECTED_MESSAGE: &str = "Wallet connected successfully.";
pub const DISCONNECTED_MESSAGE: &str = "Wallet disconnected.";

/// Everything the panel needs from its environment.
pub trait WalletHost {
    /// Connectors exposed by the connection library, in option order.
    fn connectors(&self) -> Vec<ConnectorInfo>;

    /// Start connecting with connector `index`.
    ///
    /// `Ok` only means the attempt was started; its outcome arrives later via
    /// [`ConnectPanel::on_connected`] or [`ConnectPanel::on_connect_error`].
    fn connect(&self, index: usize) -> Result<(), ConnectError>;

    fn disconnect(&self);

    fn load_last_wallet(&self) -> Option<String>;

    fn store_last_wallet(&self, name: &str);

    fn forget_last_wallet(&self);

    fn notify(&self, notification: Notification);

    fn track(&self, event: AnalyticsEvent);

    fn set_download_clicked(&self, clicked: bool);

    /// Hand the parent a new display mode. Hosts without a parent callback
    /// keep the default no-op.
    fn switch_mode(&self, _mode: WalletMode) {}
}

/// The connector most recently attempted, kept so the user can retry it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionAttempt {
    pub wallet_key: String,
    pub connector_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelStatus {
    Idle,
    Connecting,
    Connected(String),
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectPanel {
    auto_reconnect: bool,
    connecting: bool,
    reconnect_attempted: bool,
    retry: Option<ConnectionAttempt>,
    connected: Option<String>,
}

impl Default for ConnectPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConnectPanel {
    pub fn new(auto_reconnect: bool) -> Self {
        Self {
            auto_reconnect,
            connecting: false,
            reconnect_attempted: false,
            retry: None,
            connected: None,
        }
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn reconnect_attempted(&self) -> bool {
        self.reconnect_attempted
    }

    pub fn retry_target(&self) -> Option<&ConnectionAttempt> {
        self.retry.as_ref()
    }

    pub fn status(&self) -> PanelStatus {
        if self.connecting {
            PanelStatus::Connecting
        } else if let Some(name) = &self.connected {
            PanelStatus::Connected(name.clone())
        } else if self.shows_retry() {
            PanelStatus::Failed
        } else {
            PanelStatus::Idle
        }
    }

    /// Whether the "Connection failed. Retry" row should be visible.
    pub fn shows_retry(&self) -> bool {
        self.retry.is_some() && !self.connecting && self.reconnect_attempted
    }

    /// Whether the button for connector `index` should show the spinner.
    pub fn is_pending(&self, index: usize) -> bool {
        self.connecting
            && self
                .retry
                .as_ref()
                .is_some_and(|attempt| attempt.connector_index == index)
    }

    /// Try the last connected wallet once, when the panel first appears.
    pub fn mount(&mut self, host: &impl WalletHost) {
        if self.connecting || self.reconnect_attempted {
            return;
        }
        if !self.auto_reconnect {
            self.reconnect_attempted = true;
            return;
        }

        let Some(last) = host.load_last_wallet() else {
            self.reconnect_attempted = true;
            return;
        };

        let connectors = host.connectors();
        let Some(index) = find_connector(&connectors, &last) else {
            log::debug!("Stored wallet {last:?} matches no connector, skipping reconnect");
            self.reconnect_attempted = true;
            return;
        };

        let wallet_key = wallet_key_at(index, &connectors[index].name);
        log::info!("Reconnecting to last wallet {}", connectors[index].name);
        self.connecting = true;
        self.retry = Some(ConnectionAttempt {
            wallet_key: wallet_key.clone(),
            connector_index: index,
        });
        host.notify(Notification::info(RECONNECTING_MESSAGE));

        if let Err(err) = host.connect(index) {
            self.connecting = false;
            self.reconnect_attempted = true;
            self.report_error(host, &wallet_key, &err);
        }
    }

    /// Handle a click on the wallet button at `index`.
    pub fn select(&mut self, host: &impl WalletHost, index: usize) {
        let Some(option) = WALLET_OPTIONS.get(index) else {
            return;
        };
        host.track(AnalyticsEvent::connect_clicked(option.key));
        self.retry = Some(ConnectionAttempt {
            wallet_key: option.key.to_string(),
            connector_index: index,
        });
        self.reconnect_attempted = true;
        self.request_connect(host, index);
    }

    /// Start an attempt with connector `index`. Does nothing if the library
    /// has no such connector.
    pub fn request_connect(&mut self, host: &impl WalletHost, index: usize) {
        let Some(connector) = host.connectors().into_iter().nth(index) else {
            log::warn!("No connector at index {index}");
            return;
        };

        self.connecting = true;
        if let Err(err) = host.connect(index) {
            self.connecting = false;
            let wallet_key = wallet_key_at(index, &connector.name);
            self.report_error(host, &wallet_key, &err);
        }
    }

    /// Retry the last attempted connector, if one is remembered.
    pub fn retry(&mut self, host: &impl WalletHost) {
        if let Some(attempt) = self.retry.clone() {
            self.request_connect(host, attempt.connector_index);
        }
    }

    /// Success callback from the connection library.
    pub fn on_connected(&mut self, host: &impl WalletHost, connector_name: Option<&str>) {
        self.connecting = false;
        self.retry = None;
        self.reconnect_attempted = true;
        if let Some(name) = connector_name {
            host.store_last_wallet(name);
            self.connected = Some(name.to_string());
        }
        host.track(AnalyticsEvent::connect_result(true));
        host.notify(Notification::success(CONNECTED_MESSAGE));
    }

    /// Error callback from the connection library.
    pub fn on_connect_error(
        &mut self,
        host: &impl WalletHost,
        connector_name: Option<&str>,
        err: &ConnectError,
    ) {
        self.connecting = false;
        self.reconnect_attempted = true;
        host.track(AnalyticsEvent::connect_result(false));

        let wallet_key = connector_name
            .filter(|name| !name.is_empty())
            .map(|name| wallet_key_for(&host.connectors(), name))
            .or_else(|| self.retry.as_ref().map(|attempt| attempt.wallet_key.clone()))
            .unwrap_or_default();
        self.report_error(host, &wallet_key, err);
        self.retry = None;
    }

    /// Disconnect and forget the stored wallet so the next mount stays idle.
    pub fn disconnect(&mut self, host: &impl WalletHost) {
        host.disconnect();
        host.forget_last_wallet();
        self.connected = None;
        self.retry = None;
        host.notify(Notification::info(DISCONNECTED_MESSAGE));
    }

    /// The "click here" install link.
    pub fn click_download(&self, host: &impl WalletHost) {
        host.set_download_clicked(true);
        host.switch_mode(WalletMode::Download);
    }

    fn report_error(&self, host: &impl WalletHost, wallet_key: &str, err: &ConnectError) {
        log::warn!("Wallet connection failed ({wallet_key}): {err}");
        host.notify(Notification::error(describe_error(wallet_key, err)));
    }
}

/// Error-table key for a connector: the key of the option it serves, or the
/// normalized connector name when it serves none.
fn wallet_key_for(connectors: &[ConnectorInfo], name: &str) -> String {
    match find_connector(connectors, name) {
        Some(index) => wallet_key_at(index, name),
        None => normalize_wallet_key(name),
    }
}

fn wallet_key_at(index: usize, name: &str) -> String {
    WALLET_OPTIONS
        .get(index)
        .map(|option| option.key.to_string())
        .unwrap_or_else(|| normalize_wallet_key(name))
}

/// Text before the install link, depending on whether it was clicked before.
pub fn download_prompt(download_clicked: bool) -> &'static str {
    if download_clicked {
        "Please refresh page after installation. Re-install "
    } else {
        "Don't have one? "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_ERROR_MESSAGE;
    use crate::events::{EventName, NotificationLevel};
    use std::cell::{Cell, RefCell};

    /// Records every call the panel makes into its host.
    struct RecordingHost {
        connectors: Vec<ConnectorInfo>,
        stored: RefCell<Option<String>>,
        connect_calls: RefCell<Vec<usize>>,
        connect_result: Result<(), ConnectError>,
        notifications: RefCell<Vec<Notification>>,
        events: RefCell<Vec<AnalyticsEvent>>,
        download_clicked: Cell<bool>,
        disconnects: Cell<usize>,
        with_mode_callback: bool,
        modes: RefCell<Vec<WalletMode>>,
    }

    impl RecordingHost {
        fn new() -> Self {
            Self {
                connectors: WALLET_OPTIONS
                    .iter()
                    .map(|option| ConnectorInfo::new(option.display_name))
                    .collect(),
                stored: RefCell::new(None),
                connect_calls: RefCell::new(Vec::new()),
                connect_result: Ok(()),
                notifications: RefCell::new(Vec::new()),
                events: RefCell::new(Vec::new()),
                download_clicked: Cell::new(false),
                disconnects: Cell::new(0),
                with_mode_callback: true,
                modes: RefCell::new(Vec::new()),
            }
        }

        fn with_stored(self, name: &str) -> Self {
            *self.stored.borrow_mut() = Some(name.to_string());
            self
        }

        fn failing(mut self, err: ConnectError) -> Self {
            self.connect_result = Err(err);
            self
        }

        fn last_notification(&self) -> Option<Notification> {
            self.notifications.borrow().last().cloned()
        }
    }

    impl WalletHost for RecordingHost {
        fn connectors(&self) -> Vec<ConnectorInfo> {
            self.connectors.clone()
        }

        fn connect(&self, index: usize) -> Result<(), ConnectError> {
            self.connect_calls.borrow_mut().push(index);
            self.connect_result.clone()
        }

        fn disconnect(&self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }

        fn load_last_wallet(&self) -> Option<String> {
            self.stored.borrow().clone()
        }

        fn store_last_wallet(&self, name: &str) {
            *self.stored.borrow_mut() = Some(name.to_string());
        }

        fn forget_last_wallet(&self) {
            *self.stored.borrow_mut() = None;
        }

        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }

        fn track(&self, event: AnalyticsEvent) {
            self.events.borrow_mut().push(event);
        }

        fn set_download_clicked(&self, clicked: bool) {
            self.download_clicked.set(clicked);
        }

        fn switch_mode(&self, mode: WalletMode) {
            if self.with_mode_callback {
                self.modes.borrow_mut().push(mode);
            }
        }
    }

    #[test]
    fn test_mount_reconnects_to_stored_wallet_once() {
        let host = RecordingHost::new().with_stored("walletconnect");
        let mut panel = ConnectPanel::default();

        panel.mount(&host);
        panel.mount(&host);

        assert_eq!(*host.connect_calls.borrow(), vec![4]);
        assert!(panel.is_connecting());
        assert_eq!(
            panel.retry_target(),
            Some(&ConnectionAttempt { wallet_key: "wallet_connect".to_string(), connector_index: 4 })
        );
        assert!(panel.is_pending(4));
        assert_eq!(host.last_notification(), Some(Notification::info(RECONNECTING_MESSAGE)));
    }

    #[test]
    fn test_mount_without_match_does_not_connect() {
        let host = RecordingHost::new().with_stored("Phantom");
        let mut panel = ConnectPanel::default();

        panel.mount(&host);

        assert!(host.connect_calls.borrow().is_empty());
        assert!(panel.reconnect_attempted());
        assert!(!panel.is_connecting());
        assert_eq!(panel.status(), PanelStatus::Idle);
    }

    #[test]
    fn test_mount_without_stored_wallet() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.mount(&host);

        assert!(host.connect_calls.borrow().is_empty());
        assert!(panel.reconnect_attempted());
        assert!(host.notifications.borrow().is_empty());
    }

    #[test]
    fn test_mount_respects_disabled_auto_reconnect() {
        let host = RecordingHost::new().with_stored("MetaMask");
        let mut panel = ConnectPanel::new(false);

        panel.mount(&host);

        assert!(host.connect_calls.borrow().is_empty());
        assert!(panel.reconnect_attempted());
    }

    #[test]
    fn test_mount_sync_failure_leaves_retry_available() {
        let host = RecordingHost::new()
            .with_stored("MetaMask")
            .failing(ConnectError::Unavailable("MetaMask".to_string()));
        let mut panel = ConnectPanel::default();

        panel.mount(&host);

        assert!(!panel.is_connecting());
        assert!(panel.shows_retry());
        assert_eq!(panel.status(), PanelStatus::Failed);
        assert_eq!(
            host.last_notification(),
            Some(Notification::error("Please install MetaMask extension or check if it's unlocked"))
        );
    }

    #[test]
    fn test_success_clears_state_and_persists_name() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.select(&host, 1);
        assert!(panel.is_connecting());
        assert!(panel.is_pending(1));

        panel.on_connected(&host, Some("TokenPocket"));

        assert!(!panel.is_connecting());
        assert!(panel.retry_target().is_none());
        assert_eq!(host.stored.borrow().as_deref(), Some("TokenPocket"));
        assert_eq!(panel.status(), PanelStatus::Connected("TokenPocket".to_string()));
        assert_eq!(host.last_notification(), Some(Notification::success(CONNECTED_MESSAGE)));
        assert_eq!(host.events.borrow().last(), Some(&AnalyticsEvent::connect_result(true)));
    }

    #[test]
    fn test_error_for_known_wallet_uses_table_message() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.select(&host, 0);
        panel.on_connect_error(
            &host,
            Some("MetaMask"),
            &ConnectError::Rejected("User rejected the request.".to_string()),
        );

        let notification = host.last_notification().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.message, "Please install MetaMask extension or check if it's unlocked");
        assert!(!panel.is_connecting());
        assert!(panel.reconnect_attempted());
        assert!(panel.retry_target().is_none());
        assert_eq!(host.events.borrow().last(), Some(&AnalyticsEvent::connect_result(false)));
    }

    #[test]
    fn test_error_for_unknown_wallet_uses_raw_message() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.on_connect_error(
            &host,
            Some("Rabby"),
            &ConnectError::Rejected("Request expired".to_string()),
        );

        assert_eq!(host.last_notification(), Some(Notification::error("Request expired")));
    }

    #[test]
    fn test_error_without_connector_falls_back_to_retry_key() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.select(&host, 2);
        panel.on_connect_error(&host, None, &ConnectError::Unknown);

        assert_eq!(
            host.last_notification(),
            Some(Notification::error("Please install Bitget Wallet or check if it's unlocked"))
        );
    }

    #[test]
    fn test_error_without_any_key_or_message_is_generic() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.on_connect_error(&host, None, &ConnectError::Unknown);

        assert_eq!(host.last_notification(), Some(Notification::error(GENERIC_ERROR_MESSAGE)));
    }

    #[test]
    fn test_select_tracks_click_and_ignores_unknown_index() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.select(&host, 9);
        assert!(host.events.borrow().is_empty());
        assert!(host.connect_calls.borrow().is_empty());

        panel.select(&host, 3);
        let events = host.events.borrow();
        assert_eq!(events[0].action, EventName::ConnectWallet);
        assert_eq!(events[0].label.as_deref(), Some("particle_network"));
        assert_eq!(*host.connect_calls.borrow(), vec![3]);
    }

    #[test]
    fn test_request_connect_without_connector_is_noop() {
        let mut host = RecordingHost::new();
        host.connectors.truncate(2);
        let mut panel = ConnectPanel::default();

        panel.request_connect(&host, 4);

        assert!(!panel.is_connecting());
        assert!(host.connect_calls.borrow().is_empty());
    }

    #[test]
    fn test_sync_failure_on_click_then_retry() {
        let mut host = RecordingHost::new().failing(ConnectError::Unavailable("TokenPocket".to_string()));
        let mut panel = ConnectPanel::default();

        panel.select(&host, 1);
        assert!(!panel.is_connecting());
        assert!(panel.shows_retry());
        assert_eq!(
            host.last_notification(),
            Some(Notification::error("Please install TokenPocket or check if it's unlocked"))
        );

        host.connect_result = Ok(());
        panel.retry(&host);

        assert_eq!(*host.connect_calls.borrow(), vec![1, 1]);
        assert!(panel.is_connecting());
        assert!(!panel.shows_retry());
    }

    #[test]
    fn test_retry_without_target_does_nothing() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.retry(&host);

        assert!(host.connect_calls.borrow().is_empty());
    }

    #[test]
    fn test_disconnect_forgets_stored_wallet() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();
        panel.select(&host, 0);
        panel.on_connected(&host, Some("MetaMask"));

        panel.disconnect(&host);

        assert_eq!(host.disconnects.get(), 1);
        assert!(host.stored.borrow().is_none());
        assert_eq!(panel.status(), PanelStatus::Idle);
        assert_eq!(host.last_notification(), Some(Notification::info(DISCONNECTED_MESSAGE)));

        let mut remounted = ConnectPanel::default();
        remounted.mount(&host);
        assert_eq!(*host.connect_calls.borrow(), vec![0]);
    }

    #[test]
    fn test_click_download_sets_flag_and_switches_mode() {
        let host = RecordingHost::new();
        let panel = ConnectPanel::default();

        panel.click_download(&host);

        assert!(host.download_clicked.get());
        assert_eq!(*host.modes.borrow(), vec![WalletMode::Download]);
    }

    #[test]
    fn test_click_download_without_mode_callback() {
        let mut host = RecordingHost::new();
        host.with_mode_callback = false;
        let panel = ConnectPanel::default();

        panel.click_download(&host);

        assert!(host.download_clicked.get());
        assert!(host.modes.borrow().is_empty());
    }

    #[test]
    fn test_connector_names_with_spaces_resolve_table_messages() {
        for (index, name, message) in [
            (2, "Bitget Wallet", "Please install Bitget Wallet or check if it's unlocked"),
            (3, "Particle Network", "Particle Network connection failed. Please try again."),
        ] {
            let host = RecordingHost::new().failing(ConnectError::Unavailable(name.to_string()));
            let mut panel = ConnectPanel::default();
            panel.select(&host, index);
            assert_eq!(host.last_notification(), Some(Notification::error(message)), "{name}");

            let host = RecordingHost::new();
            let mut panel = ConnectPanel::default();
            panel.select(&host, index);
            panel.on_connect_error(
                &host,
                Some(name),
                &ConnectError::Rejected("User rejected the request.".to_string()),
            );
            assert_eq!(host.last_notification(), Some(Notification::error(message)), "{name}");
        }
    }

    #[test]
    fn test_reconnect_state_uses_option_key() {
        let host = RecordingHost::new()
            .with_stored("bitget wallet")
            .failing(ConnectError::Unknown);
        let mut panel = ConnectPanel::default();

        panel.mount(&host);

        assert_eq!(panel.retry_target().map(|a| a.wallet_key.as_str()), Some("bitget_wallet"));
        assert_eq!(
            host.last_notification(),
            Some(Notification::error("Please install Bitget Wallet or check if it's unlocked"))
        );
    }

    #[test]
    fn test_pending_connect_completes_after_switching_views() {
        let host = RecordingHost::new();
        let mut panel = ConnectPanel::default();

        panel.select(&host, 0);
        panel.click_download(&host);
        // Coming back to the connect view mounts the same state again
        panel.mount(&host);
        panel.on_connected(&host, Some("MetaMask"));

        assert_eq!(*host.connect_calls.borrow(), vec![0]);
        assert_eq!(host.stored.borrow().as_deref(), Some("MetaMask"));
        assert_eq!(panel.status(), PanelStatus::Connected("MetaMask".to_string()));
        assert_eq!(host.last_notification(), Some(Notification::success(CONNECTED_MESSAGE)));
    }

    #[test]
    fn test_download_prompt() {
        assert_eq!(download_prompt(false), "Don't have one? ");
        assert_eq!(download_prompt(true), "Please refresh page after installation. Re-install ");
    }
}
