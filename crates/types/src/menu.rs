use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named entry in a menu tree.
///
/// A node without children (absent or empty) is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuNode>>,
}

impl MenuNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    pub fn branch(name: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }

    /// Child nodes, or an empty slice for leaves.
    pub fn children(&self) -> &[MenuNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

/// One tab's content: a title, an ordered category mapping, and footer links.
///
/// Category order is the insertion order of the source document. The first
/// category in that order is the one selected when the tab is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    pub title: String,
    #[serde(default)]
    pub categories: IndexMap<String, Vec<MenuNode>>,
    #[serde(default)]
    pub footer_links: Vec<String>,
}

impl MenuDocument {
    /// First category key in document order.
    pub fn first_category(&self) -> Option<&str> {
        self.categories.keys().next().map(String::as_str)
    }

    pub fn category(&self, key: &str) -> Option<&[MenuNode]> {
        self.categories.get(key).map(Vec::as_slice)
    }

    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

/// The three fixed menu slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum MenuKey {
    #[default]
    Menu1,
    Menu2,
    Menu3,
}

impl MenuKey {
    /// Every key in tab order.
    pub const ALL: [MenuKey; 3] = [MenuKey::Menu1, MenuKey::Menu2, MenuKey::Menu3];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuKey::Menu1 => "menu1",
            MenuKey::Menu2 => "menu2",
            MenuKey::Menu3 => "menu3",
        }
    }

    /// Zero-based position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            MenuKey::Menu1 => 0,
            MenuKey::Menu2 => 1,
            MenuKey::Menu3 => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu key '{0}' (expected menu1, menu2 or menu3)")]
pub struct ParseMenuKeyError(pub String);

impl FromStr for MenuKey {
    type Err = ParseMenuKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "menu1" => Ok(MenuKey::Menu1),
            "menu2" => Ok(MenuKey::Menu2),
            "menu3" => Ok(MenuKey::Menu3),
            _ => Err(ParseMenuKeyError(s.to_string())),
        }
    }
}

/// All three menu documents, available together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCollection {
    menu1: MenuDocument,
    menu2: MenuDocument,
    menu3: MenuDocument,
}

impl MenuCollection {
    pub fn new(menu1: MenuDocument, menu2: MenuDocument, menu3: MenuDocument) -> Self {
        Self { menu1, menu2, menu3 }
    }

    pub fn get(&self, key: MenuKey) -> &MenuDocument {
        match key {
            MenuKey::Menu1 => &self.menu1,
            MenuKey::Menu2 => &self.menu2,
            MenuKey::Menu3 => &self.menu3,
        }
    }

    /// Documents paired with their keys, in tab order.
    pub fn iter(&self) -> impl Iterator<Item = (MenuKey, &MenuDocument)> {
        MenuKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
