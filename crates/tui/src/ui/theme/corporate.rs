use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dark navy surfaces with an amber accent for the corporate pages.
pub const NAVY_950: Color = Color::Rgb(0x0B, 0x12, 0x20); // #0b1220
pub const NAVY_900: Color = Color::Rgb(0x11, 0x1B, 0x2E); // #111b2e
pub const NAVY_700: Color = Color::Rgb(0x24, 0x33, 0x4F); // #24334f
pub const STEEL: Color = Color::Rgb(0x8A, 0x9B, 0xB8); // #8a9bb8
pub const MIST: Color = Color::Rgb(0xE5, 0xE9, 0xF0); // #e5e9f0
pub const AMBER: Color = Color::Rgb(0xF5, 0x9E, 0x0B); // #f59e0b
pub const AMBER_LIGHT: Color = Color::Rgb(0xFC, 0xD3, 0x4D); // #fcd34d
pub const ROSE: Color = Color::Rgb(0xF4, 0x3F, 0x5E); // #f43f5e

/// Alternate palette active while the `corporate` category is selected.
#[derive(Debug, Clone)]
pub struct CorporateTheme {
    roles: ThemeRoles,
}

impl CorporateTheme {
    pub const fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: NAVY_950,
                surface: NAVY_900,
                border: NAVY_700,

                text: MIST,
                text_secondary: STEEL,
                text_muted: STEEL,

                accent_primary: AMBER,
                accent_secondary: AMBER_LIGHT,

                error: ROSE,

                selection_bg: AMBER,
                selection_fg: NAVY_950,
                focus: AMBER_LIGHT,

                tab_bar_bg: NAVY_950,
                footer_bg: NAVY_700,
                footer_fg: MIST,
            },
        }
    }
}

impl Default for CorporateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for CorporateTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    fn name(&self) -> &'static str {
        "corporate"
    }
}
