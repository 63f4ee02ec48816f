//! Component system for the navigator.
//!
//! Components are self-contained UI regions that handle their own input and
//! render themselves into a provided `Rect`. They change the view state only
//! by sending messages through `App::update`, and report anything the runtime
//! must do (loading, quitting) as `Effect`s.

use crossterm::event::{KeyEvent, MouseEvent};
use menubar_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
};

use crate::app::App;

pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that landed inside this component's last area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Key hints shown while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations may record layout (hit areas) on the app state but must
    /// not change the view state.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}

/// Returns the index of the item area under `(x, y)`, if the point is inside `container`.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, item_areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    item_areas.iter().position(|area| area.contains(position))
}
