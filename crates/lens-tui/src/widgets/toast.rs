//! Toast notification system — transient status messages.
//!
//! Toasts display in append order, never deduplicate, auto-expire after a
//! fixed 5-second lifetime (with a short exit fade before actual removal),
//! and can be dismissed early by clicking them — which cancels the pending
//! auto-dismiss so the same toast is never removed twice.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{C_MUTED, C_TOAST_ERROR, C_TOAST_INFO, C_TOAST_SUCCESS, C_TOAST_WARNING};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);
const TOAST_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

struct Toast {
    message: String,
    severity: Severity,
    shown_at: Instant,
    /// Set once the lifetime elapses; the toast lingers dimmed for the fade
    /// interval, then goes away.
    fading_since: Option<Instant>,
}

pub struct ToastManager {
    toasts: VecDeque<Toast>,
    /// (queue index, rect) pairs from the last draw, for click hit-testing.
    hit_areas: Vec<(usize, Rect)>,
    max_visible: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            hit_areas: Vec::new(),
            max_visible: 4,
        }
    }

    /// Append a toast.  Duplicates are allowed; append order is display order.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.push_back(Toast {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
            fading_since: None,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    /// Advance expiry. Call each tick.
    pub fn tick(&mut self) {
        self.sweep(Instant::now());
    }

    fn sweep(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if toast.fading_since.is_none() && now >= toast.shown_at + TOAST_LIFETIME {
                toast.fading_since = Some(now);
            }
        }
        self.toasts
            .retain(|t| t.fading_since.map_or(true, |at| now < at + TOAST_FADE));
    }

    /// Dismiss the toast under (col, row), if any.  Removal cancels the
    /// pending auto-dismiss outright.
    pub fn click(&mut self, col: u16, row: u16) -> bool {
        let hit = self.hit_areas.iter().find_map(|(idx, rect)| {
            let inside = col >= rect.x
                && col < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height;
            inside.then_some(*idx)
        });
        match hit {
            Some(idx) => self.dismiss_at(idx),
            None => false,
        }
    }

    fn dismiss_at(&mut self, idx: usize) -> bool {
        self.toasts.remove(idx).is_some()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn color(severity: Severity) -> ratatui::style::Color {
        match severity {
            Severity::Info => C_TOAST_INFO,
            Severity::Success => C_TOAST_SUCCESS,
            Severity::Warning => C_TOAST_WARNING,
            Severity::Error => C_TOAST_ERROR,
        }
    }

    fn icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "·",
            Severity::Success => "✓",
            Severity::Warning => "!",
            Severity::Error => "✗",
        }
    }

    /// Render toasts stacked in the top-right corner of `area`, oldest first.
    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        self.hit_areas.clear();
        if self.toasts.is_empty() {
            return;
        }
        let max_width = (area.width / 2).clamp(30, 60);
        let mut y = area.y + 1;

        for (idx, toast) in self.toasts.iter().take(self.max_visible).enumerate() {
            if y >= area.y + area.height {
                break;
            }
            let text = format!(
                " {} {} ",
                Self::icon(toast.severity),
                &toast.message
            );
            let w = (text.width() as u16).min(max_width);
            let x = area.x + area.width.saturating_sub(w + 1);
            let toast_area = Rect {
                x,
                y,
                width: w,
                height: 1,
            };

            let style = if toast.fading_since.is_some() {
                Style::default().fg(C_MUTED)
            } else {
                Style::default()
                    .fg(Self::color(toast.severity))
                    .add_modifier(Modifier::BOLD)
            };

            frame.render_widget(Clear, toast_area);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(text, style))),
                toast_area,
            );

            self.hit_areas.push((idx, toast_area));
            y += 1;
        }
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_kept_in_append_order() {
        let mut tm = ToastManager::new();
        tm.error("copy failed");
        tm.error("copy failed");
        tm.success("done");
        assert_eq!(tm.len(), 3);
        assert_eq!(tm.toasts[0].severity, Severity::Error);
        assert_eq!(tm.toasts[2].severity, Severity::Success);
    }

    #[test]
    fn toasts_fade_then_expire() {
        let mut tm = ToastManager::new();
        tm.info("hello");
        let born = tm.toasts[0].shown_at;

        tm.sweep(born + Duration::from_secs(4));
        assert_eq!(tm.len(), 1);
        assert!(tm.toasts[0].fading_since.is_none());

        tm.sweep(born + Duration::from_secs(5));
        assert_eq!(tm.len(), 1, "fade interval keeps the toast briefly");
        assert!(tm.toasts[0].fading_since.is_some());

        tm.sweep(born + Duration::from_secs(6));
        assert!(tm.is_empty());
    }

    #[test]
    fn dismiss_cancels_pending_auto_removal() {
        let mut tm = ToastManager::new();
        tm.info("first");
        tm.info("second");
        let born = tm.toasts[0].shown_at;

        assert!(tm.dismiss_at(0));
        assert_eq!(tm.len(), 1);
        assert_eq!(tm.toasts[0].message, "second");

        // The sweep after the dismissed toast's deadline removes nothing extra.
        tm.sweep(born + Duration::from_secs(1));
        assert_eq!(tm.len(), 1);
    }

    #[test]
    fn click_outside_any_toast_is_a_noop() {
        let mut tm = ToastManager::new();
        tm.info("hello");
        assert!(!tm.click(0, 0));
        assert_eq!(tm.len(), 1);
    }

    #[test]
    fn click_hits_drawn_rect() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut tm = ToastManager::new();
        tm.info("hello");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                tm.draw(f, area);
            })
            .unwrap();
        let (_, rect) = tm.hit_areas[0];
        assert!(tm.click(rect.x, rect.y));
        assert!(tm.is_empty());
    }
}
