//! Browser services: wallet providers, storage, analytics, configuration

pub mod analytics;
pub mod config;
pub mod host;
pub mod storage;
pub mod wallet;
