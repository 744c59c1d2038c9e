//! Reactive application state shared through Leptos context

pub mod panel;
pub mod toast;
pub mod wallet;
