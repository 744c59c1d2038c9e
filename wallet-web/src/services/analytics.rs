//! Analytics via the page's `gtag` snippet, when one is loaded.

use shared::events::AnalyticsEvent;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function sendEvent(event) {
    if (typeof window.gtag !== 'function') {
        return false;
    }
    const params = { event_category: event.category };
    if (event.label !== undefined) {
        params.event_label = event.label;
    }
    window.gtag('event', event.action, params);
    return true;
}
")]
extern "C" {
    #[wasm_bindgen(js_name = sendEvent)]
    fn send_event(event: JsValue) -> bool;
}

pub fn track(event: &AnalyticsEvent) {
    let payload = match serde_wasm_bindgen::to_value(event) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Failed to encode analytics event {:?}: {}", event, e);
            return;
        }
    };
    if !send_event(payload) {
        log::debug!("gtag missing, dropped event {:?}", event);
    }
}
