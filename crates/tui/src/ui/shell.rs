//! Navigation shell: the composition root of the UI.
//!
//! Responsibilities
//! - Request the menu load exactly once per session.
//! - Show the loading indicator while the load is pending, and only the
//!   error message once it has failed.
//! - Lay out the tab bar, headline, category bar, menu tree, intro block,
//!   footer and hint line once the menus are available.
//! - Route keys to the focused component and clicks to the component under
//!   the pointer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use menubar_types::{Effect, MenuKey, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::{App, FocusArea};
use crate::ui::components::{
    CategoryBarComponent, Component, FooterComponent, IntroComponent, MenuTreeComponent, TabBarComponent,
};
use crate::ui::layout::ShellLayout;
use crate::ui::theme::{Theme, theme_helpers as th};

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Default)]
pub struct NavigationShell {
    load_requested: bool,
    tab_bar: TabBarComponent,
    category_bar: CategoryBarComponent,
    tree: MenuTreeComponent,
    intro: IntroComponent,
    footer: FooterComponent,
    last_layout: Option<ShellLayout>,
}

impl NavigationShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects to run when the session starts. Only the first call requests the load.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.load_requested {
            return Vec::new();
        }
        self.load_requested = true;
        vec![Effect::LoadMenus]
    }

    fn focused_component(&mut self, focus: FocusArea) -> &mut dyn Component {
        match focus {
            FocusArea::Tabs => &mut self.tab_bar,
            FocusArea::Categories => &mut self.category_bar,
            FocusArea::Tree => &mut self.tree,
        }
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return vec![Effect::Quit],
            KeyCode::Char('q') | KeyCode::Esc => return vec![Effect::Quit],
            _ => {}
        }
        if app.view.collection().is_none() {
            return Vec::new();
        }

        match key.code {
            KeyCode::Tab => {
                app.focus = app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus = app.focus.prev();
                Vec::new()
            }
            KeyCode::Char(digit @ '1'..='3') => {
                let index = digit as usize - '1' as usize;
                if let Some(menu) = MenuKey::from_index(index) {
                    app.update(&Msg::SelectMenu(menu));
                }
                Vec::new()
            }
            _ => self.focused_component(app.focus).handle_key_events(app, key),
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let Some(layout) = self.last_layout else {
            return Vec::new();
        };
        if app.view.collection().is_none() {
            return Vec::new();
        }
        if matches!(mouse.kind, MouseEventKind::ScrollDown | MouseEventKind::ScrollUp) {
            return self.tree.handle_mouse_events(app, mouse);
        }

        let position = Position::new(mouse.column, mouse.row);
        if layout.tab_bar.contains(position) {
            self.tab_bar.handle_mouse_events(app, mouse)
        } else if layout.category_bar.contains(position) {
            self.category_bar.handle_mouse_events(app, mouse)
        } else if layout.tree.contains(position) {
            self.tree.handle_mouse_events(app, mouse)
        } else {
            Vec::new()
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme();
        frame.render_widget(Block::default().style(th::page_style(theme)), area);

        if app.view.is_loading() {
            self.last_layout = None;
            render_centered(frame, area, Line::from(Span::styled(LOADING_TEXT, theme.text_secondary_style())));
            return;
        }
        if let Some(message) = app.view.error() {
            self.last_layout = None;
            render_centered(frame, area, Line::from(Span::styled(message.to_string(), theme.status_error())));
            return;
        }

        let footer_height = FooterComponent::height_for(app.view.footer_links().len());
        let layout = ShellLayout::split(area, footer_height);
        self.last_layout = Some(layout);

        self.tab_bar.render(frame, layout.tab_bar, app);
        render_headline(frame, layout.headline, app, theme);
        self.category_bar.render(frame, layout.category_bar, app);
        self.tree.render(frame, layout.tree, app);
        self.intro.render(frame, layout.intro, app);
        self.footer.render(frame, layout.footer, app);

        let mut hints = match app.focus {
            FocusArea::Tabs => self.tab_bar.get_hint_spans(app),
            FocusArea::Categories => self.category_bar.get_hint_spans(app),
            FocusArea::Tree => self.tree.get_hint_spans(app),
        };
        hints.extend(th::build_hint_spans(theme, &[("Tab", " focus  "), ("1-3", " tab  "), ("q", " quit")]));
        hints.push(Span::styled(format!("  [{}]", theme.name()), theme.text_muted_style()));
        frame.render_widget(Paragraph::new(Line::from(hints)).style(th::page_style(theme)), layout.hints);
    }
}

fn render_headline(frame: &mut Frame, area: Rect, app: &App, theme: &dyn Theme) {
    let title = app.view.current_menu().map(|menu| menu.title.clone()).unwrap_or_default();
    let style = theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(title, style))), area);
}

fn render_centered(frame: &mut Frame, area: Rect, line: Line<'_>) {
    let [_, middle, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3), Constraint::Fill(1)]).areas(area);
    frame.render_widget(Paragraph::new(line).centered().wrap(Wrap { trim: true }), middle);
}
