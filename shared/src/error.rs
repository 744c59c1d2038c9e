//! # Connection Errors
//!
//! Error types for the connect panel and the message table used to turn a
//! failed connection into something a user can act on.
//!
//! ## Message Resolution
//!
//! [`describe_error`] resolves the toast text for a failed attempt:
//!
//! 1. The wallet-specific message from [`wallet_error_message`], keyed by the
//!    lowercased wallet key (both the option key and the connector name form
//!    are listed, e.g. `meta_mask` and `metamask`)
//! 2. The raw message carried by the error, when non-empty
//! 3. [`GENERIC_ERROR_MESSAGE`]
//!
//! ```rust
//! use shared::error::{describe_error, ConnectError};
//!
//! let err = ConnectError::Rejected("User rejected the request.".to_string());
//! assert_eq!(
//!     describe_error("metamask", &err),
//!     "Please install MetaMask extension or check if it's unlocked"
//! );
//! assert_eq!(describe_error("unknown", &err), "User rejected the request.");
//! ```

use thiserror::Error;

/// Shown when neither the table nor the error itself has anything better.
pub const GENERIC_ERROR_MESSAGE: &str = "Connection failed. Please try again.";

/// Failure of a single connection attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// The connector's provider is not present in the page.
    ///
    /// Raised synchronously, before any request reaches the wallet.
    #[error("{0} not found")]
    Unavailable(String),

    /// The wallet or library rejected the attempt with a message.
    #[error("{0}")]
    Rejected(String),

    /// The attempt failed without any message.
    #[error("connection failed")]
    Unknown,
}

impl ConnectError {
    /// The message carried by the error itself, if it has a usable one.
    pub fn raw_message(&self) -> Option<String> {
        match self {
            ConnectError::Unavailable(_) => Some(self.to_string()),
            ConnectError::Rejected(message) if !message.trim().is_empty() => Some(message.clone()),
            ConnectError::Rejected(_) | ConnectError::Unknown => None,
        }
    }
}

/// Errors raised while loading or validating panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Invalid(String),

    #[error("Configuration decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Normalize a wallet identifier for table lookup.
pub fn normalize_wallet_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Wallet-specific advice for a failed connection.
pub fn wallet_error_message(wallet_key: &str) -> Option<&'static str> {
    let message = match normalize_wallet_key(wallet_key).as_str() {
        "meta_mask" | "metamask" => "Please install MetaMask extension or check if it's unlocked",
        "token_pocket" | "tokenpocket" => "Please install TokenPocket or check if it's unlocked",
        "bitget_wallet" | "bitkeep" => "Please install Bitget Wallet or check if it's unlocked",
        "particle_network" | "particleauth" => "Particle Network connection failed. Please try again.",
        "wallet_connect" | "walletconnect" => "WalletConnect connection failed. Please try again.",
        _ => return None,
    };
    Some(message)
}

/// Resolve the message shown to the user for `err` on wallet `wallet_key`.
pub fn describe_error(wallet_key: &str, err: &ConnectError) -> String {
    wallet_error_message(wallet_key)
        .map(str::to_string)
        .or_else(|| err.raw_message())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_both_key_forms() {
        for (option_key, connector_key) in [
            ("meta_mask", "metamask"),
            ("token_pocket", "tokenpocket"),
            ("bitget_wallet", "bitkeep"),
            ("particle_network", "particleauth"),
            ("wallet_connect", "walletconnect"),
        ] {
            assert!(wallet_error_message(option_key).is_some(), "{option_key}");
            assert_eq!(wallet_error_message(option_key), wallet_error_message(connector_key));
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            wallet_error_message("MetaMask"),
            Some("Please install MetaMask extension or check if it's unlocked")
        );
    }

    #[test]
    fn test_known_key_wins_over_raw_message() {
        let err = ConnectError::Rejected("boom".to_string());
        assert_eq!(
            describe_error("walletconnect", &err),
            "WalletConnect connection failed. Please try again."
        );
    }

    #[test]
    fn test_unknown_key_uses_raw_message() {
        let err = ConnectError::Rejected("User rejected the request.".to_string());
        assert_eq!(describe_error("phantom", &err), "User rejected the request.");

        let err = ConnectError::Unavailable("Phantom".to_string());
        assert_eq!(describe_error("phantom", &err), "Phantom not found");
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(describe_error("", &ConnectError::Unknown), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            describe_error("", &ConnectError::Rejected("  ".to_string())),
            GENERIC_ERROR_MESSAGE
        );
    }
}
