use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers.
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the page background behind all panels.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Style for the tab strip background.
pub fn tab_bar_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default().bg(theme.roles().tab_bar_bg).fg(theme.roles().selection_fg)
}

/// Button style: filled accent when selected, plain surface otherwise.
pub fn button_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    if selected {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        panel_style(theme).fg(theme.roles().text_secondary)
    }
}

/// Renders a bordered button; the border carries focus, the fill carries selection.
pub fn render_button<T: Theme + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    theme: &T,
    is_focused: bool,
    is_selected: bool,
) {
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border_style(is_focused)),
            )
            .style(button_style(theme, is_selected)),
        area,
    );
}

/// Container for the footer; its colors follow the active palette.
pub fn footer_block<'a, T: Theme + ?Sized>(theme: &T) -> Block<'a> {
    let ThemeRoles {
        footer_bg,
        footer_fg,
        border,
        ..
    } = *theme.roles();
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(border).bg(footer_bg))
        .style(Style::default().bg(footer_bg).fg(footer_fg))
}

/// Builds `key description` span pairs for the hint line.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
