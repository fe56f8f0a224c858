//! ResultsPane — renders a stored AnalysisResult.
//!
//! Score dial sweep comes from the gauge angle (score-linear, 360° full
//! scale); the confidence bar is proportional with a rounded percent label.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{risk_color, C_MUTED, C_PRIMARY, C_SECONDARY, C_SELECTION_BG, C_TOAST_INFO},
    widgets::pane_chrome::pane_chrome,
};

pub struct ResultsPane {
    explanation_scroll: u16,
}

impl ResultsPane {
    pub fn new() -> Self {
        Self {
            explanation_scroll: 0,
        }
    }
}

impl Component for ResultsPane {
    fn id(&self) -> ComponentId {
        ComponentId::ResultsPane
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        match key.code {
            KeyCode::Char('y') => vec![Action::ShareResult],
            KeyCode::Char('n') => vec![Action::Reset],
            KeyCode::Up | KeyCode::Char('k') => {
                self.explanation_scroll = self.explanation_scroll.saturating_sub(1);
                vec![]
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.explanation_scroll = self.explanation_scroll.saturating_add(1);
                vec![]
            }
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.explanation_scroll = self.explanation_scroll.saturating_sub(1);
            }
            MouseEventKind::ScrollDown => {
                self.explanation_scroll = self.explanation_scroll.saturating_add(1);
            }
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        // Fresh result, fresh scroll position.
        if matches!(action, Action::Analyze) {
            self.explanation_scroll = 0;
        }
        Vec::new()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let Some(result) = &state.result else {
            return;
        };

        let block = pane_chrome("results", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // score label
                Constraint::Length(1), // score gauge
                Constraint::Length(1), // risk line
                Constraint::Length(1), // spacer
                Constraint::Min(2),    // explanation
                Constraint::Length(1), // confidence gauge
            ])
            .split(inner);

        let risk = risk_color(&result.risk_class());

        let score_line = Line::from(vec![
            Span::styled(" risk score ", Style::default().fg(C_SECONDARY)),
            Span::styled(
                format!("{}", result.score),
                Style::default()
                    .fg(risk)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("/100", Style::default().fg(C_MUTED)),
        ]);
        frame.render_widget(Paragraph::new(score_line), chunks[0]);

        // Dial sweep: the angle function normalized to a ratio of the full circle.
        let sweep = result.gauge_angle_deg() / 360.0;
        let score_gauge = Gauge::default()
            .ratio(sweep.clamp(0.0, 1.0))
            .gauge_style(Style::default().fg(risk).bg(C_SELECTION_BG))
            .label(Span::styled(
                format!("{}", result.score),
                Style::default().fg(C_PRIMARY),
            ));
        frame.render_widget(score_gauge, chunks[1]);

        let risk_line = Line::from(vec![
            Span::styled(" risk level ", Style::default().fg(C_SECONDARY)),
            Span::styled(
                result.risk_level.as_str(),
                Style::default().fg(risk).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(risk_line), chunks[2]);

        frame.render_widget(
            Paragraph::new(result.explanation.as_str())
                .style(Style::default().fg(C_PRIMARY))
                .wrap(Wrap { trim: false })
                .scroll((self.explanation_scroll, 0)),
            chunks[4],
        );

        let pct = result.confidence_percent();
        let confidence_gauge = Gauge::default()
            .ratio(f64::from(result.confidence.clamp(0.0, 1.0)))
            .gauge_style(Style::default().fg(C_TOAST_INFO).bg(C_SELECTION_BG))
            .label(Span::styled(
                format!("confidence {}%", pct),
                Style::default().fg(C_PRIMARY),
            ));
        frame.render_widget(confidence_gauge, chunks[5]);
    }
}
