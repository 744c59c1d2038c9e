//! Toast notifications
//!
//! Toasts are pushed from the connect panel and removed automatically after
//! the configured duration, or earlier when the user dismisses them.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::events::{Notification, NotificationLevel};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: RwSignal<Vec<Toast>>,
    duration_ms: u32,
}

impl ToastContext {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            duration_ms,
        }
    }

    pub fn push(&self, notification: Notification) {
        let toast = Toast {
            id: Uuid::new_v4(),
            level: notification.level,
            message: notification.message,
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));

        let context = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(context.duration_ms).await;
            context.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        // The toaster may already be gone when a timer fires
        self.toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

pub fn provide_toast_context(duration_ms: u32) -> ToastContext {
    let context = ToastContext::new(duration_ms);
    provide_context(context);
    context
}

pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}
