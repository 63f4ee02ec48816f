//! Shared types for the menubar workspace.
//!
//! The menu data model ([`MenuNode`], [`MenuDocument`], [`MenuCollection`])
//! mirrors the JSON documents served alongside the site. The message and
//! effect enums ([`Msg`], [`Effect`]) are the vocabulary the TUI runtime uses
//! to route user input and background results through the view state.

mod locations;
mod menu;

pub use locations::MenuLocations;
pub use menu::{MenuCollection, MenuDocument, MenuKey, MenuNode, ParseMenuKeyError};

/// Application messages that drive view-state reactions.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// All three menu documents loaded successfully.
    MenusLoaded(Box<MenuCollection>),
    /// Loading failed; carries the user-facing message.
    MenusFailed(String),
    /// A tab in the menu bar was activated.
    SelectMenu(MenuKey),
    /// A category button was activated.
    SelectCategory(String),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the three menu documents.
    LoadMenus,
    /// Leave the application.
    Quit,
}
