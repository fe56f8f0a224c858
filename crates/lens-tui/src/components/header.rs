//! Header component — title, resolved endpoint, and backend health badge.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::{AppState, HealthState},
    component::Component,
    theme::{C_ACCENT, C_BADGE_ERR, C_BADGE_LIVE, C_BADGE_PENDING, C_MUTED, C_SECONDARY},
    widgets::pane_chrome::{pane_chrome, Badge},
};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Header {
    fn id(&self) -> ComponentId {
        ComponentId::Header
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        let badge = match state.health {
            HealthState::Ready => Some(Badge {
                text: "LIVE",
                color: C_BADGE_LIVE,
            }),
            HealthState::NoModel => Some(Badge {
                text: "NO MODEL",
                color: C_BADGE_PENDING,
            }),
            HealthState::Down => Some(Badge {
                text: "DOWN",
                color: C_BADGE_ERR,
            }),
            HealthState::Unknown => None,
        };

        let block = pane_chrome("scamlens", false, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = Line::from(vec![
            Span::styled(
                " image risk analysis",
                Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", Style::default().fg(C_MUTED)),
            Span::styled(state.endpoint.as_str(), Style::default().fg(C_SECONDARY)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}
