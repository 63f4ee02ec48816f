//! Screen layout for the navigation shell.
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Areas of the loaded navigation UI, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShellLayout {
    pub tab_bar: Rect,
    pub headline: Rect,
    pub category_bar: Rect,
    pub tree: Rect,
    pub intro: Rect,
    pub footer: Rect,
    pub hints: Rect,
}

impl ShellLayout {
    /// Splits `area` into the shell regions.
    ///
    /// The tab bar and footer span the full width; the page content in
    /// between is inset by two columns. The tree absorbs any leftover height.
    pub fn split(area: Rect, footer_height: u16) -> Self {
        let [tab_bar, page, footer, hints] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .areas(area);

        let [headline, category_bar, tree, intro] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(page.inner(Margin::new(2, 0)));

        Self {
            tab_bar,
            headline,
            category_bar,
            tree,
            intro,
            footer,
            hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_overlap() {
        let layout = ShellLayout::split(Rect::new(0, 0, 80, 30), 3);
        assert_eq!(layout.tab_bar, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.headline.y, 3);
        assert_eq!(layout.headline.x, 2);
        assert_eq!(layout.category_bar.y, 5);
        assert_eq!(layout.tree.y, 8);
        assert_eq!(layout.hints, Rect::new(0, 29, 80, 1));
        assert_eq!(layout.footer, Rect::new(0, 26, 80, 3));
        assert_eq!(layout.intro.bottom(), layout.footer.y);
        assert_eq!(layout.tree.bottom(), layout.intro.y);
    }
}
