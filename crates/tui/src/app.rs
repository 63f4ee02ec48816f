//! Application state for the navigator.
//!
//! [`App`] combines the shared [`ViewState`] with the UI-only state each
//! component needs between frames. All view-state changes go through
//! [`App::update`], which also keeps the component state aligned with the new
//! selection (bar focus indices, menu tree mount).

use menubar_types::Msg;

use crate::state::ViewState;
use crate::ui::components::button_bar::ButtonBarState;
use crate::ui::components::menu_tree::MenuTreeState;
use crate::ui::theme::{Theme, theme_for};

/// Region that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    #[default]
    Tabs,
    Categories,
    Tree,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            FocusArea::Tabs => FocusArea::Categories,
            FocusArea::Categories => FocusArea::Tree,
            FocusArea::Tree => FocusArea::Tabs,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusArea::Tabs => FocusArea::Tree,
            FocusArea::Categories => FocusArea::Tabs,
            FocusArea::Tree => FocusArea::Categories,
        }
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub view: ViewState,
    pub focus: FocusArea,
    pub tab_bar: ButtonBarState,
    pub category_bar: ButtonBarState,
    pub tree: MenuTreeState,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a message to the view state and re-syncs component state.
    pub fn update(&mut self, msg: &Msg) {
        if self.view.update(msg) {
            self.sync_with_view();
        }
    }

    fn sync_with_view(&mut self) {
        let menu = self.view.selected_menu();
        self.tab_bar.focused_index = menu.index();

        let category = self.view.selected_category();
        self.category_bar.focused_index = category
            .and_then(|selected| self.view.category_keys().iter().position(|key| *key == selected))
            .unwrap_or(0);

        self.tree.mount(menu, category);
    }

    /// Palette matching the current derived theme flag.
    pub fn theme(&self) -> &'static dyn Theme {
        theme_for(self.view.is_alternate_theme())
    }
}
