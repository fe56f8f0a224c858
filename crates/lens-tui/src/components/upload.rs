//! UploadPane — the idle view: how to get an image in.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{C_MUTED, C_PRIMARY, C_SECONDARY},
    widgets::pane_chrome::pane_chrome,
};

pub struct UploadPane;

impl UploadPane {
    pub fn new() -> Self {
        Self
    }
}

impl Component for UploadPane {
    fn id(&self) -> ComponentId {
        ComponentId::UploadPane
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let block = pane_chrome("upload", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let max_mib = state.max_upload_bytes / (1024 * 1024);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                " drop an image here",
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " paste a file path into the terminal, pick one from the",
                Style::default().fg(C_SECONDARY),
            )),
            Line::from(Span::styled(
                " browser on the left, or press o to type a path",
                Style::default().fg(C_SECONDARY),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(" image files only · up to {} MiB", max_mib),
                Style::default().fg(C_MUTED),
            )),
            Line::from(Span::styled(
                format!(" service: {}", state.endpoint),
                Style::default().fg(C_MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
