//! Color palette and style constants for the scamlens TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_ACCENT: Color = Color::Rgb(255, 95, 95);
pub const C_MUTED: Color = Color::Rgb(72, 72, 88);
pub const C_SEPARATOR: Color = Color::Rgb(40, 40, 52);
pub const C_SECONDARY: Color = Color::Rgb(115, 115, 138);
pub const C_PRIMARY: Color = Color::Rgb(210, 210, 225);
pub const C_SELECTION_BG: Color = Color::Rgb(28, 28, 40);
pub const C_PANEL_BORDER: Color = Color::Rgb(40, 40, 52);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(120, 100, 200);
pub const C_TOAST_INFO: Color = Color::Rgb(80, 160, 220);
pub const C_TOAST_SUCCESS: Color = Color::Rgb(80, 200, 120);
pub const C_TOAST_WARNING: Color = Color::Rgb(255, 184, 80);
pub const C_TOAST_ERROR: Color = Color::Rgb(255, 95, 95);
pub const C_BADGE_LIVE: Color = Color::Rgb(80, 200, 120);
pub const C_BADGE_ERR: Color = Color::Rgb(255, 95, 95);
pub const C_BADGE_PENDING: Color = Color::Rgb(255, 184, 80);
pub const C_MODE_NORMAL: Color = Color::Rgb(115, 115, 138);
pub const C_MODE_PATH: Color = Color::Rgb(255, 200, 80);

pub const C_RISK_LOW: Color = Color::Rgb(80, 200, 120);
pub const C_RISK_MEDIUM: Color = Color::Rgb(255, 184, 80);
pub const C_RISK_HIGH: Color = Color::Rgb(255, 80, 80);

/// Color for a risk style class (`risk-<level>`).  Unknown labels fall back
/// to the secondary tone.
pub fn risk_color(risk_class: &str) -> Color {
    match risk_class {
        "risk-low" => C_RISK_LOW,
        "risk-medium" => C_RISK_MEDIUM,
        "risk-high" => C_RISK_HIGH,
        _ => C_SECONDARY,
    }
}

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_selected_focused() -> Style {
    Style::default()
        .bg(C_SELECTION_BG)
        .fg(C_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_risk_classes_map_to_distinct_colors() {
        assert_eq!(risk_color("risk-low"), C_RISK_LOW);
        assert_eq!(risk_color("risk-medium"), C_RISK_MEDIUM);
        assert_eq!(risk_color("risk-high"), C_RISK_HIGH);
    }

    #[test]
    fn unknown_risk_class_falls_back() {
        assert_eq!(risk_color("risk-critical"), C_SECONDARY);
    }
}
