//! EVM Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the injected browser wallets behind the panel's
//! five connectors. Connector `i` serves `WALLET_OPTIONS[i]`.

use shared::error::ConnectError;
use shared::wallet::{ConnectorInfo, WALLET_OPTIONS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// CONNECTOR DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function injected(predicate) {
    const eth = window.ethereum;
    if (!eth) {
        return null;
    }
    const providers = Array.isArray(eth.providers) ? eth.providers : [eth];
    return providers.find(predicate) || null;
}

const CONNECTORS = [
    () => injected(p => p.isMetaMask && !p.isTokenPocket && !p.isBitKeep),
    () => injected(p => p.isTokenPocket),
    () => (window.bitkeep && window.bitkeep.ethereum) || injected(p => p.isBitKeep),
    () => (window.particle && (window.particle.ethereum || window.particle.evm)) || null,
    () => window.walletConnectProvider || null,
];

export function hasConnector(index) {
    const resolve = CONNECTORS[index];
    return !!(resolve && resolve());
}

export async function requestAccounts(index) {
    const provider = CONNECTORS[index] && CONNECTORS[index]();
    if (!provider) {
        throw new Error('Wallet provider not found');
    }
    const accounts = await provider.request({ method: 'eth_requestAccounts' });
    if (!accounts || accounts.length === 0) {
        throw new Error('No accounts returned by wallet');
    }
    return accounts[0];
}

export async function disconnectConnector(index) {
    const provider = CONNECTORS[index] && CONNECTORS[index]();
    if (provider && typeof provider.disconnect === 'function') {
        await provider.disconnect();
    }
}
")]
extern "C" {
    /// Whether the provider for connector `index` is injected in the page
    #[wasm_bindgen(js_name = hasConnector)]
    fn has_connector(index: usize) -> bool;

    /// Ask connector `index` for account access; resolves to the first account
    #[wasm_bindgen(js_name = requestAccounts, catch)]
    async fn request_accounts(index: usize) -> Result<JsValue, JsValue>;

    /// Disconnect connector `index` when the provider supports it
    #[wasm_bindgen(js_name = disconnectConnector, catch)]
    async fn disconnect_connector(index: usize) -> Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Connectors in option order.
pub fn connectors() -> Vec<ConnectorInfo> {
    WALLET_OPTIONS
        .iter()
        .map(|option| ConnectorInfo::new(option.display_name))
        .collect()
}

/// Check that connector `index` can be used right now.
///
/// This is the synchronous half of a connection attempt.
pub fn ensure_connector(index: usize) -> Result<(), ConnectError> {
    let name = WALLET_OPTIONS
        .get(index)
        .map(|option| option.display_name)
        .unwrap_or("Unknown");
    if has_connector(index) {
        Ok(())
    } else {
        Err(ConnectError::Unavailable(name.to_string()))
    }
}

/// Request account access from connector `index`.
pub async fn connect_connector(index: usize) -> Result<String, ConnectError> {
    let account = request_accounts(index).await.map_err(js_error)?;
    account
        .as_string()
        .ok_or_else(|| ConnectError::Rejected("Account is not a string".to_string()))
}

pub async fn disconnect(index: usize) {
    if let Err(e) = disconnect_connector(index).await {
        log::warn!("Disconnect failed: {}", js_error(e));
    }
}

/// Convert a thrown JS value into a [`ConnectError`].
fn js_error(value: JsValue) -> ConnectError {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return ConnectError::Rejected(String::from(err.message()));
    }
    if let Some(message) = value.as_string() {
        return ConnectError::Rejected(message);
    }
    // EIP-1193 errors are plain objects with a message field
    match js_sys::Reflect::get(&value, &JsValue::from_str("message")) {
        Ok(message) => match message.as_string() {
            Some(message) => ConnectError::Rejected(message),
            None => ConnectError::Unknown,
        },
        Err(_) => ConnectError::Unknown,
    }
}
