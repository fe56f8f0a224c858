pub mod pane_chrome;
pub mod path_input;
pub mod status_bar;
pub mod toast;
