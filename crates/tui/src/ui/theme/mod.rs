//! Theme styling for the navigator.
//!
//! Two palettes exist: the standard one, and the alternate corporate one that
//! is active while the `corporate` category is selected. Components never pick
//! colors themselves; they ask [`theme_for`] for the palette matching the
//! current view state and build styles through [`theme_helpers`].

pub mod corporate;
pub mod roles;
pub mod standard;
pub mod theme_helpers;

pub use corporate::CorporateTheme;
pub use roles::{Theme, ThemeRoles};
pub use standard::StandardTheme;

static STANDARD: StandardTheme = StandardTheme::new();
static CORPORATE: CorporateTheme = CorporateTheme::new();

/// Returns the palette for the derived theme flag.
pub fn theme_for(is_alternate: bool) -> &'static dyn Theme {
    if is_alternate {
        &CORPORATE as &dyn Theme
    } else {
        &STANDARD as &dyn Theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_flag_selects_corporate_palette() {
        assert_eq!(theme_for(true).name(), "corporate");
        assert_eq!(theme_for(false).name(), "standard");
        assert_ne!(theme_for(true).roles().footer_bg, theme_for(false).roles().footer_bg);
    }
}
