//! View state for the navigation shell.
//!
//! [`ViewState`] holds which menu tab and category are active, whether the
//! alternate theme applies, and the load outcome. It changes only through the
//! named reactions below (or [`ViewState::update`], which dispatches to them).
//! Each reaction ends with a settle step that recomputes derived fields, so
//! every observable state is fully consistent.

use menubar_types::{MenuCollection, MenuDocument, MenuKey, MenuNode, Msg};
use tracing::debug;

/// Category key that switches the UI to the alternate theme.
pub const ALTERNATE_THEME_CATEGORY: &str = "corporate";

/// Returns `true` when `category` selects the alternate theme.
pub fn is_alternate_category(category: Option<&str>) -> bool {
    category == Some(ALTERNATE_THEME_CATEGORY)
}

/// Outcome of the one-time menu load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    /// Terminal: the message replaces the whole UI for the session.
    Failed(String),
    Ready(MenuCollection),
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    load: LoadStatus,
    selected_menu: MenuKey,
    selected_category: Option<String>,
    /// Cached derivation of `selected_category`; written only by `settle`.
    is_alternate_theme: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a message to the state and returns whether anything changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        match msg {
            Msg::MenusLoaded(collection) => self.collection_loaded(collection.as_ref().clone()),
            Msg::MenusFailed(message) => self.load_failed(message.clone()),
            Msg::SelectMenu(key) => self.select_menu(*key),
            Msg::SelectCategory(key) => self.select_category(key),
        }
    }

    /// Installs the loaded collection and selects the first menu and its first category.
    ///
    /// Ignored unless the load is still pending.
    pub fn collection_loaded(&mut self, collection: MenuCollection) -> bool {
        if !self.is_loading() {
            debug!("Ignoring menu collection delivered after load settled");
            return false;
        }
        self.selected_menu = MenuKey::Menu1;
        self.selected_category = first_category(collection.get(MenuKey::Menu1));
        self.load = LoadStatus::Ready(collection);
        self.settle();
        true
    }

    /// Records a load failure. Once failed, no other reaction has an effect.
    pub fn load_failed(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.load = LoadStatus::Failed(message.into());
        self.selected_category = None;
        self.settle();
        true
    }

    /// Switches tabs and resets the category to the new menu's first one.
    pub fn select_menu(&mut self, key: MenuKey) -> bool {
        let LoadStatus::Ready(collection) = &self.load else {
            return false;
        };
        let category = first_category(collection.get(key));
        debug!(menu = %key, category = ?category, "Menu selected");
        self.selected_menu = key;
        self.selected_category = category;
        self.settle();
        true
    }

    /// Selects a category of the current menu. Keys the menu does not have are ignored.
    pub fn select_category(&mut self, key: &str) -> bool {
        let Some(menu) = self.current_menu() else {
            return false;
        };
        if !menu.categories.contains_key(key) {
            debug!(category = key, menu = %self.selected_menu, "Ignoring unknown category");
            return false;
        }
        debug!(category = key, "Category selected");
        self.selected_category = Some(key.to_string());
        self.settle();
        true
    }

    fn settle(&mut self) {
        self.is_alternate_theme = is_alternate_category(self.selected_category.as_deref());
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadStatus::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn collection(&self) -> Option<&MenuCollection> {
        match &self.load {
            LoadStatus::Ready(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn selected_menu(&self) -> MenuKey {
        self.selected_menu
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn is_alternate_theme(&self) -> bool {
        self.is_alternate_theme
    }

    pub fn current_menu(&self) -> Option<&MenuDocument> {
        self.collection().map(|collection| collection.get(self.selected_menu))
    }

    /// Category keys of the current menu in document order.
    pub fn category_keys(&self) -> Vec<&str> {
        self.current_menu()
            .map(|menu| menu.category_keys().collect())
            .unwrap_or_default()
    }

    /// Root nodes of the selected category; empty when nothing is selected.
    pub fn visible_items(&self) -> &[MenuNode] {
        match (self.current_menu(), self.selected_category.as_deref()) {
            (Some(menu), Some(category)) => menu.category(category).unwrap_or_default(),
            _ => &[],
        }
    }

    pub fn footer_links(&self) -> &[String] {
        self.current_menu().map(|menu| menu.footer_links.as_slice()).unwrap_or_default()
    }
}

fn first_category(menu: &MenuDocument) -> Option<String> {
    menu.first_category().map(str::to_string)
}
