//! UI Components

pub mod connect_panel;
pub mod download_panel;
pub mod toaster;

pub use connect_panel::ConnectPanelView;
pub use download_panel::DownloadPanel;
pub use toaster::Toaster;
