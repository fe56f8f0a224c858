//! AppState — shared read-only data passed to all components during render/event.
//!
//! Components read this, but never mutate it.  The App event-loop is the
//! only thing that writes to AppState.

use std::path::PathBuf;

use lens_api::protocol::AnalysisResult;

use crate::intake::{PreviewPixels, SelectedFile};
use crate::view::{Sections, ViewState};
use crate::widgets::status_bar::InputMode;

/// Backend health as learned from the startup probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthState {
    /// Probe still in flight.
    #[default]
    Unknown,
    /// Service reachable and its model backend connected.
    Ready,
    /// Service reachable but the model backend is not connected.
    NoModel,
    /// Service unreachable or returned a non-OK status.
    Down,
}

/// An image file listed in the browse directory.
#[derive(Debug, Clone)]
pub struct ImageFileEntry {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub modified: Option<std::time::SystemTime>,
}

/// The full shared state of the application.
pub struct AppState {
    // ── Service ─────────────────────────────────────────────────────────────
    /// Resolved base URL.  Computed once at startup, never recomputed.
    pub endpoint: String,
    pub health: HealthState,

    // ── Analysis session ────────────────────────────────────────────────────
    pub selected: Option<SelectedFile>,
    pub preview: Option<PreviewPixels>,
    pub result: Option<AnalysisResult>,
    /// Message shown by the error section.
    pub error_message: Option<String>,
    /// True while an analysis request is in flight.  The sole concurrency
    /// guard: the analyze action is ignored while set.
    pub analyzing: bool,

    // ── View ────────────────────────────────────────────────────────────────
    pub view: ViewState,
    pub sections: Sections,
    pub input_mode: InputMode,

    // ── Browse dir ──────────────────────────────────────────────────────────
    pub browse_dir: PathBuf,
    pub files: Vec<ImageFileEntry>,
    pub max_upload_bytes: u64,

    // ── Session ─────────────────────────────────────────────────────────────
    /// Recent log lines for the status bar (newest last).
    pub logs: Vec<String>,
}

impl AppState {
    pub fn new(endpoint: String, browse_dir: PathBuf, max_upload_bytes: u64) -> Self {
        Self {
            endpoint,
            health: HealthState::Unknown,
            selected: None,
            preview: None,
            result: None,
            error_message: None,
            analyzing: false,
            view: ViewState::Idle,
            sections: Sections::default(),
            input_mode: InputMode::Normal,
            browse_dir,
            files: Vec::new(),
            max_upload_bytes,
            logs: Vec::new(),
        }
    }

    /// Name of the selected file, for titles and summaries.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|f| f.name.as_str())
    }
}
