//! # Wallet Connect Shared Library
//!
//! Browser-independent half of the wallet connect panel. The web frontend
//! renders and wires it; everything that decides *what happens* lives here so
//! it can be tested natively.
//!
//! ## Structure
//!
//! - **[`wallet`]**: the fixed wallet catalogue and connector lookup
//! - **[`panel`]**: [`ConnectPanel`] state and the [`WalletHost`] seam
//! - **[`error`]**: [`ConnectError`] and the per-wallet message table
//! - **[`events`]**: analytics hits and toast notifications
//! - **[`config`]**: [`PanelConfig`] with defaults and validation
//!
//! ## Usage
//!
//! ```rust
//! use shared::error::ConnectError;
//! use shared::events::{AnalyticsEvent, Notification};
//! use shared::wallet::{ConnectorInfo, WALLET_OPTIONS};
//! use shared::{ConnectPanel, WalletHost};
//!
//! struct NoWallets;
//!
//! impl WalletHost for NoWallets {
//!     fn connectors(&self) -> Vec<ConnectorInfo> {
//!         WALLET_OPTIONS.iter().map(|o| ConnectorInfo::new(o.display_name)).collect()
//!     }
//!     fn connect(&self, index: usize) -> Result<(), ConnectError> {
//!         Err(ConnectError::Unavailable(WALLET_OPTIONS[index].display_name.to_string()))
//!     }
//!     fn disconnect(&self) {}
//!     fn load_last_wallet(&self) -> Option<String> { None }
//!     fn store_last_wallet(&self, _name: &str) {}
//!     fn forget_last_wallet(&self) {}
//!     fn notify(&self, notification: Notification) { println!("{}", notification.message); }
//!     fn track(&self, _event: AnalyticsEvent) {}
//!     fn set_download_clicked(&self, _clicked: bool) {}
//! }
//!
//! let mut panel = ConnectPanel::default();
//! panel.mount(&NoWallets);
//! panel.select(&NoWallets, 0);
//! assert!(panel.shows_retry());
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod panel;
pub mod wallet;

pub use config::PanelConfig;
pub use error::{ConfigError, ConnectError};
pub use panel::{ConnectPanel, WalletHost};
pub use wallet::{WalletMode, WalletOption, WALLET_OPTIONS};
