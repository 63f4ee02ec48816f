use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use super::find_target_index_by_mouse_position;

/// Focus and hit-testing state shared by the horizontal button bars.
#[derive(Debug, Default, Clone)]
pub struct ButtonBarState {
    /// Button that receives Enter; the selected one unless arrows moved it.
    pub focused_index: usize,
    /// Last rendered area of the bar.
    pub last_area: Rect,
    /// Last computed per-button areas for hit testing.
    pub per_item_areas: Vec<Rect>,
}

impl ButtonBarState {
    /// Moves focus one button forward or backward, wrapping at the ends.
    pub fn cycle_focus(&mut self, item_count: usize, forward: bool) {
        if item_count == 0 {
            self.focused_index = 0;
            return;
        }
        let current = self.focused_index.min(item_count - 1);
        self.focused_index = if forward {
            (current + 1) % item_count
        } else {
            (current + item_count - 1) % item_count
        };
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        find_target_index_by_mouse_position(&self.last_area, &self.per_item_areas, x, y)
    }

    /// Lays out one button per label, each sized to its text plus padding.
    pub fn layout_buttons(&mut self, area: Rect, labels: &[&str], spacing: u16) -> Vec<Rect> {
        let constraints = labels
            .iter()
            .map(|label| Constraint::Length(label.width() as u16 + 4))
            .chain(std::iter::once(Constraint::Min(0)));
        let mut areas = Layout::horizontal(constraints).spacing(spacing).split(area).to_vec();
        areas.truncate(labels.len());
        self.last_area = area;
        self.per_item_areas = areas.clone();
        areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_both_ways() {
        let mut state = ButtonBarState::default();
        state.cycle_focus(3, false);
        assert_eq!(state.focused_index, 2);
        state.cycle_focus(3, true);
        assert_eq!(state.focused_index, 0);
        state.cycle_focus(0, true);
        assert_eq!(state.focused_index, 0);
    }

    #[test]
    fn buttons_are_sized_to_labels_and_hit_tested() {
        let mut state = ButtonBarState::default();
        let areas = state.layout_buttons(Rect::new(0, 0, 60, 3), &["Privat", "Företag"], 1);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].width, 10);
        assert_eq!(areas[1].width, 11);
        assert_eq!(state.hit_test(areas[1].x + 1, 1), Some(1));
        assert_eq!(state.hit_test(59, 1), None);
    }
}
