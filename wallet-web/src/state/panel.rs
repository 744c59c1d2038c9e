//! Connect panel state, owned by the app so it outlives the panel view.
//!
//! A connect started in the panel resolves after the user may already have
//! switched to the download view. Keeping the signal at the app root lets the
//! success and error handlers still land.

use leptos::prelude::*;
use shared::{ConnectPanel, PanelConfig};

#[derive(Clone, Copy)]
pub struct PanelContext {
    pub panel: RwSignal<ConnectPanel>,
    pub storage_key: StoredValue<String>,
}

impl PanelContext {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            panel: RwSignal::new(ConnectPanel::new(config.auto_reconnect)),
            storage_key: StoredValue::new(config.storage_key.clone()),
        }
    }
}

pub fn provide_panel_context(config: &PanelConfig) -> PanelContext {
    let context = PanelContext::new(config);
    provide_context(context);
    context
}

pub fn use_panel_context() -> PanelContext {
    expect_context::<PanelContext>()
}
