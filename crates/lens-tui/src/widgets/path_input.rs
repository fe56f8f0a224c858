//! PathInput — wraps tui-input for typing an image path into the browser pane.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::{C_MODE_PATH, C_MUTED, C_SELECTION_BG};

pub enum PathInputAction {
    /// Enter pressed with a non-empty value.
    Confirmed(String),
    Cancelled,
    None,
}

pub struct PathInput {
    input: Input,
    pub active: bool,
}

impl PathInput {
    pub fn new() -> Self {
        Self {
            input: Input::default(),
            active: false,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.input = Input::default();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PathInputAction {
        match key.code {
            KeyCode::Esc => {
                self.deactivate();
                PathInputAction::Cancelled
            }
            KeyCode::Enter => {
                let value = self.input.value().trim().to_string();
                self.deactivate();
                if value.is_empty() {
                    PathInputAction::Cancelled
                } else {
                    PathInputAction::Confirmed(value)
                }
            }
            _ => {
                self.input
                    .handle_event(&ratatui::crossterm::event::Event::Key(key));
                PathInputAction::None
            }
        }
    }

    /// Render the path entry bar into `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let scroll = self
            .input
            .visual_scroll(area.width.saturating_sub(4) as usize);
        let value = self.input.value();
        let display = if value.is_empty() {
            Span::styled("> path to image…", Style::default().fg(C_MUTED))
        } else {
            Span::styled(
                format!("> {}", &value[scroll..]),
                Style::default().fg(C_MODE_PATH),
            )
        };

        let paragraph =
            Paragraph::new(Line::from(vec![display])).style(Style::default().bg(C_SELECTION_BG));
        frame.render_widget(paragraph, area);

        if self.active && !value.is_empty() {
            let cursor_x = area.x + 2 + (self.input.visual_cursor() - scroll) as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width - 1), area.y));
        }
    }
}

impl Default for PathInput {
    fn default() -> Self {
        Self::new()
    }
}
