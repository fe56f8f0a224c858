//! ErrorPane — analysis failure view, message shown verbatim.

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
    theme::{C_ACCENT, C_MUTED, C_PRIMARY},
    widgets::pane_chrome::{pane_chrome, Badge},
};

pub struct ErrorPane;

impl ErrorPane {
    pub fn new() -> Self {
        Self
    }
}

impl Component for ErrorPane {
    fn id(&self) -> ComponentId {
        ComponentId::ErrorPane
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let block = pane_chrome(
            "analysis failed",
            focused,
            Some(Badge {
                text: "ERR",
                color: C_ACCENT,
            }),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message = state.error_message.as_deref().unwrap_or("unknown error");
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " Esc to start over, or pick another image and try again",
                Style::default().fg(C_MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
