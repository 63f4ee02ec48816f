//! Static headline and body copy shown under the menu tree.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

pub const HEADLINE: &str = "Find what you are looking for";
pub const BODY: &str =
    "Pick a tab for the area you are interested in, then a category to filter its menu. Items marked ▸ open to reveal more.";

#[derive(Debug, Default)]
pub struct IntroComponent;

impl Component for IntroComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme();
        let text = vec![
            Line::from(Span::styled(HEADLINE, theme.accent_emphasis_style())),
            Line::from(Span::styled(BODY, theme.text_secondary_style())),
        ];
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }).style(th::page_style(theme)),
            area,
        );
    }
}
