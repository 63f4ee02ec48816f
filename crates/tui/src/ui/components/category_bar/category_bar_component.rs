use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use menubar_types::{Effect, Msg};
use menubar_util::category_label;
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::Paragraph,
};

use crate::app::{App, FocusArea};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, render_button};

/// Row of category filter buttons for the current menu, in document order.
#[derive(Debug, Default)]
pub struct CategoryBarComponent;

impl CategoryBarComponent {
    fn activate(app: &mut App, index: usize) -> Vec<Effect> {
        let Some(key) = app.view.category_keys().get(index).map(|key| key.to_string()) else {
            return Vec::new();
        };
        app.update(&Msg::SelectCategory(key));
        Vec::new()
    }
}

impl Component for CategoryBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let category_count = app.view.category_keys().len();
        match key.code {
            KeyCode::Left => {
                app.category_bar.cycle_focus(category_count, false);
                Vec::new()
            }
            KeyCode::Right => {
                app.category_bar.cycle_focus(category_count, true);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let index = app.category_bar.focused_index;
                Self::activate(app, index)
            }
            KeyCode::Up => {
                app.focus = FocusArea::Tabs;
                Vec::new()
            }
            KeyCode::Down => {
                app.focus = FocusArea::Tree;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(index) = app.category_bar.hit_test(mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.focus = FocusArea::Categories;
        app.category_bar.focused_index = index;
        Self::activate(app, index)
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(app.theme(), &[("←/→", " category  "), ("Enter", " filter  ")])
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme();
        let keys = app.view.category_keys();
        if keys.is_empty() {
            app.category_bar.last_area = area;
            app.category_bar.per_item_areas.clear();
            frame.render_widget(Paragraph::new("No categories").style(theme.text_muted_style()), area);
            return;
        }

        let labels: Vec<&str> = keys.iter().map(|key| category_label(key)).collect();
        let button_areas = app.category_bar.layout_buttons(area, &labels, 2);

        let has_focus = app.focus == FocusArea::Categories;
        let selected = app.view.selected_category();
        for (index, ((key, label), button_area)) in keys.iter().zip(&labels).zip(button_areas).enumerate() {
            let is_focused = has_focus && index == app.category_bar.focused_index;
            render_button(frame, button_area, label, theme, is_focused, selected == Some(*key));
        }
    }
}
