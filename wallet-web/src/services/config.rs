//! Panel configuration overrides from `window.__WALLET_PANEL_CONFIG__`.

use shared::config::PanelConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__WALLET_PANEL_CONFIG__";

/// Load the panel configuration, falling back to defaults when the page
/// provides none or an invalid one.
pub fn load_config() -> PanelConfig {
    let Some(window) = web_sys::window() else {
        return PanelConfig::default();
    };

    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return PanelConfig::default(),
    };

    let json = match js_sys::JSON::stringify(&raw) {
        Ok(json) => String::from(json),
        Err(e) => {
            log::warn!("Ignoring {}: not serializable ({:?})", CONFIG_GLOBAL, e);
            return PanelConfig::default();
        }
    };

    match PanelConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded panel config from {}", CONFIG_GLOBAL);
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_GLOBAL, e);
            PanelConfig::default()
        }
    }
}
