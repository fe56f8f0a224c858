pub mod error_panel;
pub mod file_browser;
pub mod header;
pub mod help_overlay;
pub mod loading;
pub mod preview;
pub mod results;
pub mod upload;
