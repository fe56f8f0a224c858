//! LoadingPane — braille spinner shown while the analysis request is in flight.

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
    app_state::AppState,
    component::Component,
    theme::{C_ACCENT, C_MUTED, C_SECONDARY},
    widgets::pane_chrome::pane_chrome,
};

const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct LoadingPane {
    frame: usize,
}

impl LoadingPane {
    pub fn new() -> Self {
        Self { frame: 0 }
    }
}

impl Component for LoadingPane {
    fn id(&self) -> ComponentId {
        ComponentId::LoadingPane
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    fn tick(&mut self, _state: &AppState) -> Vec<Action> {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        Vec::new()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let block = pane_chrome("analyzing", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let name = state.selected_name().unwrap_or("image");
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", SPINNER_FRAMES[self.frame]),
                    Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("analyzing {}…", name),
                    Style::default().fg(C_SECONDARY),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                " the model can take a little while on large images",
                Style::default().fg(C_MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
