//! FileBrowser component — left pane listing image files of the browse dir.
//!
//! The picker half of intake: Enter emits `SelectPath` for the highlighted
//! file, `o` opens a typed-path entry for files outside the browse dir.

use std::path::PathBuf;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::{AppState, ImageFileEntry},
    component::Component,
    intake::format_size,
    theme::{style_selected_focused, C_MUTED, C_PRIMARY, C_SECONDARY},
    widgets::{
        pane_chrome::pane_chrome,
        path_input::{PathInput, PathInputAction},
    },
};

pub struct FileBrowser {
    items: Vec<ImageFileEntry>,
    selected: usize,
    list_state: ListState,
    pub path_input: PathInput,
}

impl FileBrowser {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            path_input: PathInput::new(),
        }
    }

    /// Sync the listing from AppState (most recently modified first).
    pub fn sync_files(&mut self, state: &AppState) {
        self.items = state.files.clone();
        self.items.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then(a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let next = (self.selected as isize + delta).clamp(0, len - 1);
        self.selected = next as usize;
    }

    fn selected_path(&self) -> Option<PathBuf> {
        self.items.get(self.selected).map(|e| e.path.clone())
    }
}

impl Component for FileBrowser {
    fn id(&self) -> ComponentId {
        ComponentId::FileBrowser
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        if self.path_input.active {
            return match self.path_input.handle_key(key) {
                PathInputAction::Confirmed(path) => vec![
                    Action::ClosePathEntry,
                    Action::SelectPath(PathBuf::from(path)),
                ],
                PathInputAction::Cancelled => vec![Action::ClosePathEntry],
                PathInputAction::None => vec![],
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                vec![]
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                vec![]
            }
            KeyCode::PageUp => {
                self.move_selection(-10);
                vec![]
            }
            KeyCode::PageDown => {
                self.move_selection(10);
                vec![]
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
                vec![]
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.items.len().saturating_sub(1);
                vec![]
            }
            KeyCode::Enter => self
                .selected_path()
                .map(|p| vec![Action::SelectPath(p)])
                .unwrap_or_default(),
            KeyCode::Char('o') => {
                self.path_input.activate();
                vec![Action::OpenPathEntry]
            }
            KeyCode::Char('r') => vec![Action::RefreshBrowser],
            _ => vec![],
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, _state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::ScrollUp => self.move_selection(-1),
            MouseEventKind::ScrollDown => self.move_selection(1),
            MouseEventKind::Down(_) => {
                // Rows start below the top border.
                let row = event.row.saturating_sub(area.y + 1) as usize;
                let offset = self.list_state.offset();
                if offset + row < self.items.len() {
                    self.selected = offset + row;
                }
            }
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let title = format!("images · {}", state.browse_dir.display());
        let block = pane_chrome(&title, focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (list_area, input_area) = if self.path_input.active {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);
            (chunks[0], Some(chunks[1]))
        } else {
            (inner, None)
        };

        if self.items.is_empty() {
            let hint = Line::from(Span::styled(
                " no images here — o to type a path",
                Style::default().fg(C_MUTED),
            ));
            frame.render_widget(ratatui::widgets::Paragraph::new(hint), list_area);
        } else {
            let width = list_area.width as usize;
            let items: Vec<ListItem> = self
                .items
                .iter()
                .map(|e| {
                    let size = format_size(e.size_bytes);
                    let name_width = width.saturating_sub(size.len() + 3);
                    let name: String = e.name.chars().take(name_width).collect();
                    let pad = name_width.saturating_sub(name.chars().count());
                    ListItem::new(Line::from(vec![
                        Span::styled(format!(" {}", name), Style::default().fg(C_PRIMARY)),
                        Span::raw(" ".repeat(pad)),
                        Span::styled(format!(" {}", size), Style::default().fg(C_SECONDARY)),
                    ]))
                })
                .collect();

            self.list_state.select(Some(self.selected));
            let list = List::new(items).highlight_style(style_selected_focused());
            frame.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        if let Some(input_area) = input_area {
            self.path_input.draw(frame, input_area);
        }
    }
}
