use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use menubar_types::{Effect, MenuKey, Msg};
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    text::Span,
    widgets::Block,
};

use crate::app::{App, FocusArea};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, render_button};

/// Top strip with one button per menu document, labelled with its title.
#[derive(Debug, Default)]
pub struct TabBarComponent;

impl TabBarComponent {
    fn activate(app: &mut App, index: usize) -> Vec<Effect> {
        if let Some(key) = MenuKey::from_index(index) {
            app.update(&Msg::SelectMenu(key));
        }
        Vec::new()
    }
}

impl Component for TabBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => {
                app.tab_bar.cycle_focus(MenuKey::ALL.len(), false);
                Vec::new()
            }
            KeyCode::Right => {
                app.tab_bar.cycle_focus(MenuKey::ALL.len(), true);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let index = app.tab_bar.focused_index;
                Self::activate(app, index)
            }
            KeyCode::Down => {
                app.focus = FocusArea::Categories;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(index) = app.tab_bar.hit_test(mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.focus = FocusArea::Tabs;
        app.tab_bar.focused_index = index;
        Self::activate(app, index)
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(app.theme(), &[("←/→", " tab  "), ("Enter", " open  ")])
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme();
        frame.render_widget(Block::default().style(th::tab_bar_style(theme)), area);

        let Some(collection) = app.view.collection() else {
            return;
        };
        let titles: Vec<&str> = collection.iter().map(|(_, menu)| menu.title.as_str()).collect();
        let inner = area.inner(Margin::new(1, 0));
        let button_areas = app.tab_bar.layout_buttons(inner, &titles, 1);

        let has_focus = app.focus == FocusArea::Tabs;
        let selected = app.view.selected_menu().index();
        for (index, (title, button_area)) in titles.iter().zip(button_areas).enumerate() {
            let is_focused = has_focus && index == app.tab_bar.focused_index;
            render_button(frame, button_area, title, theme, is_focused, index == selected);
        }
    }
}
