//! App — component-based event loop.
//!
//! Architecture:
//! - `App` owns all components and `AppState` (shared read-only data for components).
//! - A `tokio::mpsc` channel carries `AppMessage` events in from background tasks
//!   (terminal events, the health probe, preview decodes, the analysis request).
//! - The event loop draws each frame, then awaits the next message.
//! - Components return `Vec<Action>`; App dispatches each Action.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use lens_api::client::{ApiClient, ApiError};
use lens_api::protocol::{AnalysisResult, HealthReport};

use crate::{
    action::Action,
    app_state::{AppState, HealthState, ImageFileEntry},
    component::Component,
    components::{
        error_panel::ErrorPane, file_browser::FileBrowser, header::Header,
        help_overlay::HelpOverlay, loading::LoadingPane, preview::PreviewPane,
        results::ResultsPane, upload::UploadPane,
    },
    intake::{self, PreviewPixels},
    share::{self, CopyOutcome},
    view::ViewState,
    widgets::{status_bar, status_bar::InputMode, toast::ToastManager},
};

// ── Internal event bus ────────────────────────────────────────────────────────

enum AppMessage {
    Event(Event),
    HealthChecked(Result<HealthReport, ApiError>),
    /// Preview decode finished for the given path.
    PreviewReady(PathBuf, PreviewPixels),
    PreviewFailed(PathBuf, String),
    AnalysisFinished(Result<AnalysisResult, ApiError>),
}

/// Stores the last-drawn layout rects for mouse hit-testing.
#[derive(Default, Clone, Copy)]
struct PaneAreas {
    browser: Rect,
    stage: Rect,
}

const MAX_LOG_LINES: usize = 200;

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    pub state: AppState,
    client: Arc<ApiClient>,

    // ── Components ────────────────────────────────────────────────────────────
    header: Header,
    browser: FileBrowser,
    upload: UploadPane,
    preview: PreviewPane,
    loading: LoadingPane,
    results: ResultsPane,
    error: ErrorPane,
    help_overlay: HelpOverlay,

    /// Toast notification manager.
    toast: ToastManager,

    /// Sender used by background tasks to report results.  Set in run().
    msg_tx: Option<mpsc::Sender<AppMessage>>,

    /// Last-drawn layout rects — used for mouse hit-testing.
    pane_areas: PaneAreas,

    should_quit: bool,
}

impl App {
    pub fn new(client: ApiClient, browse_dir: PathBuf, max_upload_bytes: u64) -> Self {
        let endpoint = client.base_url().to_string();
        Self {
            state: AppState::new(endpoint, browse_dir, max_upload_bytes),
            client: Arc::new(client),
            header: Header::new(),
            browser: FileBrowser::new(),
            upload: UploadPane::new(),
            preview: PreviewPane::new(),
            loading: LoadingPane::new(),
            results: ResultsPane::new(),
            error: ErrorPane::new(),
            help_overlay: HelpOverlay::new(),
            toast: ToastManager::new(),
            msg_tx: None,
            pane_areas: PaneAreas::default(),
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let (tx, mut rx) = mpsc::channel::<AppMessage>(256);
        self.msg_tx = Some(tx.clone());

        // ── Background task: keyboard/mouse/paste events ──────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // ── Startup health probe (one shot, never blocks anything) ────────────
        let probe_tx = tx.clone();
        let probe_client = self.client.clone();
        tokio::spawn(async move {
            let res = probe_client.health().await;
            let _ = probe_tx.send(AppMessage::HealthChecked(res)).await;
        });

        self.refresh_files();
        self.push_log(format!("scamlens started — service {}", self.state.endpoint));

        // ── Periodic timers ───────────────────────────────────────────────────
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut files_refresh = tokio::time::interval(Duration::from_secs(5));
        files_refresh.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // ── Main loop ─────────────────────────────────────────────────────────
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    self.handle_message(msg);
                }

                _ = ui_tick.tick() => {
                    self.toast.tick();
                    if self.state.sections.loading {
                        let _ = self.loading.tick(&self.state);
                    }
                }

                _ = files_refresh.tick() => {
                    self.refresh_files();
                }
            }
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Message handling ──────────────────────────────────────────────────────

    fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Event(Event::Key(key)) => self.handle_key(key),
            AppMessage::Event(Event::Mouse(mouse)) => self.handle_mouse(mouse),
            AppMessage::Event(Event::Paste(text)) => {
                // A path dropped onto the terminal arrives as a paste.
                // First file only when several were dropped.
                if let Some(first) = text.lines().map(str::trim).find(|l| !l.is_empty()) {
                    self.dispatch(Action::SelectPath(PathBuf::from(first)));
                }
            }
            AppMessage::Event(_) => {}

            AppMessage::HealthChecked(result) => self.apply_health(result),

            AppMessage::PreviewReady(path, pixels) => {
                // Drop stale decodes from a replaced selection.
                if self.state.selected.as_ref().map(|f| f.path.as_path()) == Some(path.as_path()) {
                    self.state.preview = Some(pixels);
                }
            }
            AppMessage::PreviewFailed(path, err) => {
                warn!("preview decode failed for {}: {}", path.display(), err);
                if self.state.selected.as_ref().map(|f| f.path.as_path()) == Some(path.as_path()) {
                    self.toast.warning("preview unavailable for this image");
                }
            }

            AppMessage::AnalysisFinished(result) => self.apply_analysis(result),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Overlay consumes everything while open.
        if self.help_overlay.visible {
            let actions = self.help_overlay.handle_key(key, &self.state);
            self.dispatch_all(actions);
            return;
        }

        // Path entry owns the keyboard while active.
        if self.browser.path_input.active {
            let actions = self.browser.handle_key(key, &self.state);
            self.dispatch_all(actions);
            return;
        }

        // Global keys.
        match key.code {
            KeyCode::Char('q') => {
                self.dispatch(Action::Quit);
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(Action::Quit);
                return;
            }
            KeyCode::Char('?') => {
                self.dispatch(Action::ToggleHelp);
                return;
            }
            KeyCode::Esc => {
                if matches!(
                    self.state.view,
                    ViewState::Preview | ViewState::Results | ViewState::Error
                ) {
                    self.dispatch(Action::Reset);
                }
                return;
            }
            _ => {}
        }

        // Active stage pane first, then the browser.
        let mut actions = match self.state.view {
            ViewState::Idle => self.upload.handle_key(key, &self.state),
            ViewState::Preview => self.preview.handle_key(key, &self.state),
            ViewState::Loading => self.loading.handle_key(key, &self.state),
            ViewState::Results => self.results.handle_key(key, &self.state),
            ViewState::Error => self.error.handle_key(key, &self.state),
        };
        if actions.is_empty() {
            actions = self.browser.handle_key(key, &self.state);
        }
        self.dispatch_all(actions);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(_))
            && self.toast.click(mouse.column, mouse.row)
        {
            return;
        }

        let areas = self.pane_areas;
        if rect_contains(areas.browser, mouse.column, mouse.row) {
            let actions = self.browser.handle_mouse(mouse, areas.browser, &self.state);
            self.dispatch_all(actions);
        } else if rect_contains(areas.stage, mouse.column, mouse.row)
            && self.state.sections.results
        {
            let actions = self.results.handle_mouse(mouse, areas.stage, &self.state);
            self.dispatch_all(actions);
        }
    }

    // ── Action dispatch ───────────────────────────────────────────────────────

    fn dispatch_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: Action) {
        // Give listening components a look before the App applies the effect.
        let follow_ups = self.results.on_action(&action, &self.state);

        match action {
            Action::SelectPath(path) => self.select_path(&path),
            Action::RemoveImage => {
                self.reset();
                self.toast.success("image removed");
            }
            Action::RefreshBrowser => {
                self.refresh_files();
                self.toast.info("browse directory rescanned");
            }
            Action::Analyze => self.start_analysis(),
            Action::Reset => self.reset(),
            Action::ShareResult => self.share_result(),
            Action::ToggleHelp => self.help_overlay.toggle(),
            Action::OpenPathEntry => {
                self.state.input_mode = InputMode::PathEntry;
            }
            Action::ClosePathEntry => {
                self.state.input_mode = InputMode::Normal;
            }
            Action::Quit => self.should_quit = true,
        }

        self.dispatch_all(follow_ups);
    }

    // ── Intake ────────────────────────────────────────────────────────────────

    fn select_path(&mut self, path: &Path) {
        if self.state.analyzing {
            debug!("ignoring file selection while a request is in flight");
            return;
        }

        // Typed and pasted paths may carry a leading `~/`.
        let path = &path
            .to_str()
            .map(expand_home)
            .unwrap_or_else(|| path.to_path_buf());

        let file = match intake::load_selected(path, self.state.max_upload_bytes) {
            Ok(file) => file,
            Err(e) => {
                // Rejected intake changes no state.
                self.toast.error(e.to_string());
                return;
            }
        };

        info!("selected {} ({} bytes)", file.path.display(), file.size_bytes);
        self.state.preview = None;
        self.state.result = None;
        self.state.error_message = None;

        // Decode off the event loop; the pane shows a placeholder meanwhile.
        if let Some(tx) = self.msg_tx.clone() {
            let bytes = file.bytes.clone();
            let decode_path = file.path.clone();
            tokio::task::spawn_blocking(move || {
                let msg = match intake::decode_preview(&bytes) {
                    Ok(pixels) => AppMessage::PreviewReady(decode_path, pixels),
                    Err(e) => AppMessage::PreviewFailed(decode_path, e),
                };
                let _ = tx.blocking_send(msg);
            });
        }

        self.state.selected = Some(file);
        self.set_view(ViewState::Preview);
        self.toast.success("image loaded");
    }

    // ── Analysis ──────────────────────────────────────────────────────────────

    fn start_analysis(&mut self) {
        if self.state.analyzing {
            // Sole concurrency guard: the action is disabled while in flight.
            return;
        }
        let Some(file) = &self.state.selected else {
            self.toast.error("no image selected");
            return;
        };

        let name = file.name.clone();
        let mime = file.mime.to_string();
        let bytes = file.bytes.clone();

        self.set_view(ViewState::Loading);
        self.state.analyzing = true;
        self.push_log(format!("analyzing {}", name));

        let client = self.client.clone();
        if let Some(tx) = self.msg_tx.clone() {
            tokio::spawn(async move {
                let res = client.analyze(&name, &mime, bytes).await;
                let _ = tx.send(AppMessage::AnalysisFinished(res)).await;
            });
        }
    }

    fn apply_analysis(&mut self, result: Result<AnalysisResult, ApiError>) {
        // Always re-enable the analyze action, success or failure.
        self.state.analyzing = false;

        match result {
            Ok(result) => {
                self.push_log(format!(
                    "analysis done: score {} ({})",
                    result.score, result.risk_level
                ));
                self.state.result = Some(result);
                self.set_view(ViewState::Results);
                self.toast.success("analysis complete");
            }
            Err(e) => {
                let message = e.to_string();
                self.push_log(format!("analysis failed: {}", message));
                self.state.error_message = Some(message);
                self.set_view(ViewState::Error);
                self.toast.error("analysis failed");
            }
        }
    }

    // ── Health ────────────────────────────────────────────────────────────────

    fn apply_health(&mut self, result: Result<HealthReport, ApiError>) {
        match result {
            Ok(report) if report.ollama_connected => {
                self.state.health = HealthState::Ready;
                self.toast.success("system ready — Ollama is connected");
            }
            Ok(_) => {
                self.state.health = HealthState::NoModel;
                self.toast
                    .warning("Ollama is not connected — make sure it is running");
            }
            Err(e) => {
                self.state.health = HealthState::Down;
                self.push_log(format!("health probe failed: {}", e));
                self.toast.error(format!(
                    "analysis service unreachable ({})",
                    self.state.endpoint
                ));
            }
        }
    }

    // ── Reset / share ─────────────────────────────────────────────────────────

    fn reset(&mut self) {
        self.state.selected = None;
        self.state.preview = None;
        self.state.result = None;
        self.state.error_message = None;
        self.set_view(ViewState::Idle);
    }

    fn share_result(&mut self) {
        let Some(result) = &self.state.result else {
            self.toast.error("no result to share yet");
            return;
        };

        let text = result.share_text(&self.state.endpoint);
        match share::copy_text(&text) {
            Ok(CopyOutcome::Clipboard) => self.toast.success("result copied to clipboard"),
            Ok(CopyOutcome::Osc52) => self.toast.success("result copied via terminal clipboard"),
            Err(e) => {
                warn!("copy chain exhausted: {}", e);
                self.toast.error("copy failed");
            }
        }
    }

    // ── State helpers ─────────────────────────────────────────────────────────

    fn set_view(&mut self, view: ViewState) {
        self.state.view = view;
        self.state.sections.enter(view);
    }

    fn refresh_files(&mut self) {
        self.state.files = scan_browse_dir(&self.state.browse_dir);
        self.browser.sync_files(&self.state);
    }

    fn push_log(&mut self, line: String) {
        debug!("{}", line);
        self.state.logs.push(line);
        if self.state.logs.len() > MAX_LOG_LINES {
            let drop = self.state.logs.len() - MAX_LOG_LINES;
            self.state.logs.drain(..drop);
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(8),    // body
                Constraint::Length(1), // separator
                Constraint::Length(1), // keys bar
                Constraint::Length(1), // log bar
            ])
            .split(area);

        self.header.draw(frame, rows[0], false, &self.state);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(24)])
            .split(rows[1]);
        self.pane_areas = PaneAreas {
            browser: body[0],
            stage: body[1],
        };

        let browser_focused = matches!(self.state.view, ViewState::Idle | ViewState::Error)
            || self.browser.path_input.active;
        self.browser.draw(frame, body[0], browser_focused, &self.state);

        // Exactly one stage section is ever visible (see Sections::enter).
        let stage = body[1];
        let sections = self.state.sections;
        if sections.preview {
            self.preview.draw(frame, stage, !browser_focused, &self.state);
        } else if sections.loading {
            self.loading.draw(frame, stage, !browser_focused, &self.state);
        } else if sections.results {
            self.results.draw(frame, stage, !browser_focused, &self.state);
        } else if sections.error {
            self.error.draw(frame, stage, !browser_focused, &self.state);
        } else {
            self.upload.draw(frame, stage, !browser_focused, &self.state);
        }

        status_bar::draw_separator(frame, rows[2]);
        status_bar::draw_keys_bar(frame, rows[3], self.state.input_mode, self.state.view);
        status_bar::draw_log_bar(
            frame,
            rows[4],
            self.state.logs.last().map(String::as_str),
            self.state.health,
        );

        self.toast.draw(frame, area);
        self.help_overlay.draw(frame, area, false, &self.state);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Expand a leading `~/` in typed or pasted paths.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// List image files in the browse directory (non-recursive).
fn scan_browse_dir(dir: &Path) -> Vec<ImageFileEntry> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<ImageFileEntry> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if !path.is_file() || !intake::is_image_path(&path) {
                return None;
            }
            let meta = entry.metadata().ok()?;
            Some(ImageFileEntry {
                name: path.file_name()?.to_string_lossy().into_owned(),
                size_bytes: meta.len(),
                modified: meta.modified().ok(),
                path,
            })
        })
        .collect();

    files.sort_by(|a, b| b.modified.cmp(&a.modified));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Sections;

    fn test_app() -> App {
        App::new(
            ApiClient::new("http://localhost:8000"),
            PathBuf::from("/nonexistent"),
            10 * 1024 * 1024,
        )
    }

    #[test]
    fn analyze_with_no_file_emits_one_toast_and_no_transition() {
        let mut app = test_app();
        app.dispatch(Action::Analyze);
        assert_eq!(app.state.view, ViewState::Idle);
        assert_eq!(app.state.sections, Sections::default());
        assert_eq!(app.toast.len(), 1);
        assert!(!app.state.analyzing);
    }

    #[test]
    fn rejected_intake_leaves_view_untouched() {
        let mut app = test_app();
        app.dispatch(Action::SelectPath(PathBuf::from("/tmp/notes.txt")));
        assert_eq!(app.state.view, ViewState::Idle);
        assert!(app.state.selected.is_none());
        assert_eq!(app.toast.len(), 1);
    }

    #[tokio::test]
    async fn accepted_file_enters_preview_with_one_visible_section() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("shot.png");
        std::fs::write(&path, [0u8; 64]).unwrap();

        let mut app = test_app();
        app.dispatch(Action::SelectPath(path.clone()));
        assert_eq!(app.state.view, ViewState::Preview);
        assert_eq!(app.state.sections.visible_count(), 1);
        assert!(app.state.sections.preview);
        assert_eq!(
            app.state.selected.as_ref().map(|f| f.path.clone()),
            Some(path)
        );
    }

    #[tokio::test]
    async fn service_detail_drives_error_state() {
        let mut app = test_app();
        app.state.selected = Some(crate::intake::SelectedFile {
            path: PathBuf::from("x.png"),
            name: "x.png".into(),
            mime: "image/png",
            size_bytes: 4,
            bytes: vec![0; 4],
        });
        app.state.analyzing = true;
        app.set_view(ViewState::Loading);

        app.apply_analysis(Err(ApiError::Service {
            status: 500,
            detail: "model unavailable".into(),
        }));
        assert_eq!(app.state.view, ViewState::Error);
        assert_eq!(app.state.error_message.as_deref(), Some("model unavailable"));
        assert!(!app.state.analyzing, "guard always re-enables");
        assert_eq!(app.state.sections.visible_count(), 1);
        assert!(app.state.sections.error);
    }

    #[tokio::test]
    async fn successful_analysis_drives_results_state() {
        let mut app = test_app();
        app.state.analyzing = true;
        app.set_view(ViewState::Loading);

        app.apply_analysis(Ok(AnalysisResult {
            score: 72,
            risk_level: "HIGH".into(),
            explanation: "…".into(),
            confidence: 0.9,
        }));
        assert_eq!(app.state.view, ViewState::Results);
        assert!(app.state.sections.results);
        let result = app.state.result.as_ref().unwrap();
        assert_eq!(result.risk_class(), "risk-high");
        assert_eq!(result.confidence_percent(), 90);
        assert!(!app.state.analyzing);
    }

    #[tokio::test]
    async fn reset_clears_file_and_result_from_any_view() {
        for view in [ViewState::Preview, ViewState::Results, ViewState::Error] {
            let mut app = test_app();
            app.state.selected = Some(crate::intake::SelectedFile {
                path: PathBuf::from("x.png"),
                name: "x.png".into(),
                mime: "image/png",
                size_bytes: 4,
                bytes: vec![0; 4],
            });
            app.state.result = Some(AnalysisResult {
                score: 1,
                risk_level: "LOW".into(),
                explanation: String::new(),
                confidence: 0.5,
            });
            app.set_view(view);

            app.dispatch(Action::Reset);
            assert_eq!(app.state.view, ViewState::Idle);
            assert!(app.state.selected.is_none());
            assert!(app.state.result.is_none());
            assert_eq!(app.state.sections.visible_count(), 0);
        }
    }

    #[tokio::test]
    async fn second_analyze_during_flight_is_ignored() {
        let mut app = test_app();
        app.state.selected = Some(crate::intake::SelectedFile {
            path: PathBuf::from("x.png"),
            name: "x.png".into(),
            mime: "image/png",
            size_bytes: 4,
            bytes: vec![0; 4],
        });
        app.state.analyzing = true;
        app.set_view(ViewState::Loading);

        app.dispatch(Action::Analyze);
        assert_eq!(app.state.view, ViewState::Loading);
        assert!(app.toast.is_empty(), "guard is silent, not a toast");
    }

    #[test]
    fn home_expansion_applies_to_typed_and_pasted_paths() {
        std::env::set_var("HOME", "/home/tester");
        assert_eq!(
            expand_home("~/shot.png"),
            PathBuf::from("/home/tester/shot.png")
        );
        assert_eq!(expand_home("/abs/shot.png"), PathBuf::from("/abs/shot.png"));
    }
}
