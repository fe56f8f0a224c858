//! Status bar — bottom lines with mode, key hints, and the last log line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app_state::HealthState;
use crate::theme::{
    C_BADGE_ERR, C_BADGE_LIVE, C_BADGE_PENDING, C_MODE_NORMAL, C_MODE_PATH, C_MUTED, C_SECONDARY,
    C_SEPARATOR,
};
use crate::view::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a file path into the browser pane.
    PathEntry,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::PathEntry => "PATH",
        }
    }

    pub fn color(self) -> ratatui::style::Color {
        match self {
            Self::Normal => C_MODE_NORMAL,
            Self::PathEntry => C_MODE_PATH,
        }
    }
}

/// Draw the log bar: backend health dot + last log line.
pub fn draw_log_bar(frame: &mut Frame, area: Rect, last_log: Option<&str>, health: HealthState) {
    let health_span = match health {
        HealthState::Ready => Span::styled("●", Style::default().fg(C_BADGE_LIVE)),
        HealthState::NoModel => Span::styled("●", Style::default().fg(C_BADGE_PENDING)),
        HealthState::Down => Span::styled("○", Style::default().fg(C_BADGE_ERR)),
        HealthState::Unknown => Span::styled("◌", Style::default().fg(C_MUTED)),
    };

    let log_span = Span::styled(last_log.unwrap_or(""), Style::default().fg(C_SECONDARY));

    let line = Line::from(vec![health_span, Span::raw(" "), log_span]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a horizontal separator line.
pub fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(C_SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the keybindings footer bar (one row), tailored to the active view.
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, mode: InputMode, view: ViewState) {
    let label_span = Span::styled(
        format!(" {} ", mode.label()),
        Style::default()
            .fg(mode.color())
            .add_modifier(Modifier::BOLD),
    );

    let keys = match mode {
        InputMode::PathEntry => " type a file path  Enter select  Esc cancel",
        InputMode::Normal => match view {
            ViewState::Idle => {
                " ↑↓/jk browse  Enter select  o type path  r rescan  ? help  q quit"
            }
            ViewState::Preview => " a analyze  d remove image  Esc reset  ? help  q quit",
            ViewState::Loading => " analyzing…  ? help  q quit",
            ViewState::Results => " y share/copy  n/Esc new analysis  ? help  q quit",
            ViewState::Error => " Esc start over  ↑↓ browse  Enter select  ? help  q quit",
        },
    };

    let mut spans = vec![label_span, Span::raw(" ")];
    spans.push(Span::styled(keys, Style::default().fg(C_MUTED)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
