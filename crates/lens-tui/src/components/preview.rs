//! PreviewPane — half-block pixel preview of the selected image.
//!
//! Each terminal cell carries two pixels: '▀' with the upper pixel as
//! foreground and the lower as background.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    intake::{format_size, PreviewPixels},
    theme::{C_MUTED, C_PRIMARY, C_SECONDARY},
    widgets::pane_chrome::pane_chrome,
};

pub struct PreviewPane;

impl PreviewPane {
    pub fn new() -> Self {
        Self
    }
}

impl Component for PreviewPane {
    fn id(&self) -> ComponentId {
        ComponentId::PreviewPane
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        match key.code {
            KeyCode::Char('a') => vec![Action::Analyze],
            KeyCode::Char('d') => vec![Action::RemoveImage],
            _ => vec![],
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let block = pane_chrome("preview", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 {
            return;
        }

        // Metadata line on top, image below.
        let meta_area = Rect { height: 1, ..inner };
        let image_area = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };

        if let Some(file) = &state.selected {
            let line = Line::from(vec![
                Span::styled(format!(" {}", file.name), Style::default().fg(C_PRIMARY)),
                Span::styled(
                    format!("  {} · {}", file.mime, format_size(file.size_bytes)),
                    Style::default().fg(C_SECONDARY),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), meta_area);
        }

        match &state.preview {
            Some(pixels) => draw_image(frame.buffer_mut(), image_area, pixels),
            None => {
                let hint = Line::from(Span::styled(
                    " decoding preview…",
                    Style::default().fg(C_MUTED),
                ));
                frame.render_widget(Paragraph::new(hint), image_area);
            }
        }
    }
}

/// Fit the pixel grid into `area` (1 cell = 1×2 pixels), centered.
fn draw_image(buf: &mut Buffer, area: Rect, pixels: &PreviewPixels) {
    if area.width == 0 || area.height == 0 || pixels.width == 0 || pixels.height == 0 {
        return;
    }

    let iw = pixels.width as f64;
    let ih = pixels.height as f64;
    let scale = (area.width as f64 / iw).min(area.height as f64 * 2.0 / ih);
    let cols = ((iw * scale).floor() as u16).clamp(1, area.width);
    let rows = (((ih * scale) / 2.0).ceil() as u16).clamp(1, area.height);

    let x0 = area.x + (area.width - cols) / 2;
    let y0 = area.y + (area.height - rows) / 2;

    for row in 0..rows {
        for col in 0..cols {
            let px = (col as f64 / scale) as u32;
            let py_top = ((row * 2) as f64 / scale) as u32;
            let py_bot = ((row * 2 + 1) as f64 / scale) as u32;
            let [tr, tg, tb] = pixels.sample(px, py_top);
            let [br, bg, bb] = pixels.sample(px, py_bot);

            let cell = &mut buf[(x0 + col, y0 + row)];
            cell.set_char('▀');
            cell.set_fg(Color::Rgb(tr, tg, tb));
            cell.set_bg(Color::Rgb(br, bg, bb));
        }
    }
}
