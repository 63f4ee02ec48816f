use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Slate surfaces with the site's blue accent.
pub const SLATE_900: Color = Color::Rgb(0x1F, 0x29, 0x37); // #1f2937 - tab strip
pub const SLATE_700: Color = Color::Rgb(0x37, 0x41, 0x51); // #374151
pub const SLATE_500: Color = Color::Rgb(0x6B, 0x72, 0x80); // #6b7280
pub const SLATE_300: Color = Color::Rgb(0xD1, 0xD5, 0xDB); // #d1d5db
pub const SLATE_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6); // #f3f4f6 - page background
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const CUSTOM_BLUE: Color = Color::Rgb(0x1E, 0x40, 0xAF); // #1e40af
pub const SKY: Color = Color::Rgb(0x38, 0xBD, 0xF8); // #38bdf8
pub const RED: Color = Color::Rgb(0xDC, 0x26, 0x26); // #dc2626

/// Default palette used for every category except `corporate`.
#[derive(Debug, Clone)]
pub struct StandardTheme {
    roles: ThemeRoles,
}

impl StandardTheme {
    pub const fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: SLATE_100,
                surface: WHITE,
                border: SLATE_300,

                text: SLATE_900,
                text_secondary: SLATE_700,
                text_muted: SLATE_500,

                accent_primary: CUSTOM_BLUE,
                accent_secondary: SKY,

                error: RED,

                selection_bg: CUSTOM_BLUE,
                selection_fg: WHITE,
                focus: SKY,

                tab_bar_bg: SLATE_900,
                footer_bg: SLATE_100,
                footer_fg: SLATE_700,
            },
        }
    }
}

impl Default for StandardTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for StandardTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
