//! Footer listing the current menu's links vertically.
//!
//! The container colors come from the active palette, so the footer switches
//! to the alternate styling together with the rest of the UI.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct FooterComponent {
    last_area: Rect,
}

impl FooterComponent {
    /// Number of rows the footer needs for `link_count` links.
    pub fn height_for(link_count: usize) -> u16 {
        // One row for the top border, at least one for content.
        u16::try_from(link_count.max(1)).unwrap_or(u16::MAX).saturating_add(1)
    }

    pub fn last_area(&self) -> Rect {
        self.last_area
    }
}

impl Component for FooterComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.last_area = area;
        let theme = app.theme();
        let lines: Vec<Line> = app
            .view
            .footer_links()
            .iter()
            .map(|link| Line::from(format!(" {link}")))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(th::footer_block(theme)), area);
    }
}
