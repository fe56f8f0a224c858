//! Action enum — all user-initiated intents and internal events.

use std::path::PathBuf;

/// Unique identifier for a focusable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Header,
    FileBrowser,
    UploadPane,
    PreviewPane,
    LoadingPane,
    ResultsPane,
    ErrorPane,
    HelpOverlay,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Intake ───────────────────────────────────────────────────────────────
    /// A candidate image path (browser Enter, typed path, or terminal paste).
    SelectPath(PathBuf),
    /// Drop the selected image and return to Idle.
    RemoveImage,
    /// Re-scan the browse directory.
    RefreshBrowser,

    // ── Analysis ─────────────────────────────────────────────────────────────
    Analyze,
    /// Explicit reset (Esc or cancel): back to Idle, clearing file + result.
    Reset,

    // ── Sharing ──────────────────────────────────────────────────────────────
    ShareResult,

    // ── UI toggles ───────────────────────────────────────────────────────────
    ToggleHelp,
    OpenPathEntry,
    ClosePathEntry,

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
}
