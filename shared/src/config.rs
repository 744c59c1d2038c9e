//! # Panel Configuration
//!
//! Settings for the connect panel. Every field has a default, so a host only
//! needs to supply what it wants to change:
//!
//! ```rust
//! use shared::config::PanelConfig;
//!
//! let config = PanelConfig::from_json(r#"{ "auto_reconnect": false }"#).unwrap();
//! assert!(!config.auto_reconnect);
//! assert_eq!(config.storage_key, "lastConnectedWallet");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Storage key holding the name of the last connected wallet.
pub const DEFAULT_STORAGE_KEY: &str = "lastConnectedWallet";

pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Key-value store entry for the last connected wallet name
    pub storage_key: String,

    /// Try the last used wallet again when the panel mounts
    pub auto_reconnect: bool,

    /// How long a toast stays on screen
    ///
    /// Valid range: 500-60000 ms
    pub toast_duration_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            auto_reconnect: true,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl PanelConfig {
    /// Decode and validate a JSON configuration object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }

        if !(500..=60_000).contains(&self.toast_duration_ms) {
            return Err(ConfigError::Invalid(
                "toast_duration_ms must be between 500 and 60000".to_string(),
            ));
        }

        Ok(())
    }
}
