use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use menubar_types::Effect;
use menubar_util::category_label;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use super::VisibleRow;
use crate::app::{App, FocusArea};
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

const INDENT: &str = "  ";
const COLLAPSED_MARKER: &str = "▸ ";
const EXPANDED_MARKER: &str = "▾ ";

/// Collapsible tree of the selected category's menu items.
#[derive(Debug, Default)]
pub struct MenuTreeComponent;

impl MenuTreeComponent {
    fn row_line(row: &VisibleRow, theme: &dyn Theme) -> Line<'static> {
        let indent = INDENT.repeat(row.depth);
        let (marker, label_style) = match (row.has_children, row.expanded) {
            (true, true) => (EXPANDED_MARKER, theme.text_primary_style().add_modifier(Modifier::BOLD)),
            (true, false) => (COLLAPSED_MARKER, theme.text_primary_style().add_modifier(Modifier::BOLD)),
            (false, _) => (INDENT, theme.text_primary_style()),
        };
        Line::from(vec![
            Span::raw(indent),
            Span::styled(marker, theme.accent_emphasis_style()),
            Span::styled(row.name.clone(), label_style),
        ])
    }

    /// Maps a screen row inside the list to a visible-row index.
    fn row_at(app: &App, column: u16, screen_row: u16) -> Option<usize> {
        let area = app.tree.last_area;
        if !area.contains(Position::new(column, screen_row)) {
            return None;
        }
        Some(app.tree.list_state.offset() + (screen_row - area.y) as usize)
    }
}

impl Component for MenuTreeComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let nodes = app.view.visible_items();
        let tree = &mut app.tree;
        match key.code {
            KeyCode::Up if tree.cursor() == 0 => app.focus = FocusArea::Categories,
            KeyCode::Up => tree.move_cursor(nodes, -1),
            KeyCode::Down => tree.move_cursor(nodes, 1),
            KeyCode::PageUp => tree.move_cursor(nodes, -10),
            KeyCode::PageDown => tree.move_cursor(nodes, 10),
            KeyCode::Home => tree.select_row(nodes, 0),
            KeyCode::End => tree.select_row(nodes, usize::MAX),
            KeyCode::Enter | KeyCode::Char(' ') => tree.toggle_at_cursor(nodes),
            KeyCode::Right => tree.expand_at_cursor(nodes),
            KeyCode::Left => tree.collapse_at_cursor(nodes),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(row) = Self::row_at(app, mouse.column, mouse.row) else {
                    return Vec::new();
                };
                app.focus = FocusArea::Tree;
                let nodes = app.view.visible_items();
                let Some(path) = app.tree.visible_rows(nodes).get(row).map(|visible| visible.path.clone()) else {
                    return Vec::new();
                };
                app.tree.select_row(nodes, row);
                app.tree.toggle(nodes, &path);
            }
            MouseEventKind::ScrollDown => app.tree.move_cursor(app.view.visible_items(), 1),
            MouseEventKind::ScrollUp => app.tree.move_cursor(app.view.visible_items(), -1),
            _ => {}
        }
        Vec::new()
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(app.theme(), &[("↑/↓", " move  "), ("Enter", " expand/collapse  ")])
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme();
        let has_focus = app.focus == FocusArea::Tree;
        let title = app.view.selected_category().map(category_label).unwrap_or("Menu");
        let block = th::block(theme, Some(title), has_focus);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        app.tree.last_area = inner;

        let rows = app.tree.visible_rows(app.view.visible_items());
        if rows.is_empty() {
            frame.render_widget(Paragraph::new("Nothing to show").style(theme.text_muted_style()), inner);
            return;
        }

        let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(Self::row_line(row, theme))).collect();
        let mut list = List::new(items);
        if has_focus {
            list = list.highlight_style(theme.selection_style());
        }
        app.tree.list_state.select(Some(app.tree.cursor()));
        frame.render_stateful_widget(list, inner, &mut app.tree.list_state);
    }
}
