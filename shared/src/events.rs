//! Outbound events: analytics hits and user-facing notifications.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Global,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    /// Emitted once when the app starts
    ToInvitation,
    /// A wallet button was clicked
    ConnectWallet,
    /// The connection library reported an outcome
    ConnectResult,
}

/// A single analytics hit, serialized as one object for the event sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub category: EventCategory,
    pub action: EventName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AnalyticsEvent {
    pub fn invitation() -> Self {
        Self {
            category: EventCategory::Global,
            action: EventName::ToInvitation,
            label: None,
        }
    }

    pub fn connect_clicked(wallet_key: &str) -> Self {
        Self {
            category: EventCategory::Global,
            action: EventName::ConnectWallet,
            label: Some(wallet_key.to_string()),
        }
    }

    pub fn connect_result(success: bool) -> Self {
        let label = if success { "success" } else { "failed" };
        Self {
            category: EventCategory::Global,
            action: EventName::ConnectResult,
            label: Some(label.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A toast to show the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }
}
