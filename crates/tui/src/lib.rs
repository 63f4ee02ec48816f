//! # Menubar TUI
//!
//! Terminal rendition of the site navigation: a tab bar with one tab per menu
//! document, a category bar, a collapsible menu tree, an introduction block,
//! and a footer whose styling follows the active category.
//!
//! ## Architecture
//!
//! - [`state::ViewState`] owns the selection and derived theme flag and only
//!   changes through its named reactions.
//! - `app::App` pairs the view state with per-component UI state (focus,
//!   button hit areas, the menu tree's expand arena).
//! - `ui::shell::NavigationShell` composes the components, routes input to the
//!   focused one, and requests the one-time menu load.
//! - `ui::runtime` owns the terminal and the async event loop.

mod app;
pub mod state;
mod ui;

use anyhow::Result;
use menubar_store::MenuDataStore;

pub use state::{LoadStatus, ViewState};

/// Runs the navigator until the user quits.
///
/// The terminal is put into raw mode on the alternate screen for the
/// duration of the call and restored before returning, including when the
/// event loop fails.
pub async fn run(store: MenuDataStore) -> Result<()> {
    ui::runtime::run_app(store).await
}
