/// Display names for the category keys the site knows about.
pub const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("private", "Privat"),
    ("corporate", "Företag"),
    ("kunskapsbank", "Kunskapsbank"),
];

/// Returns the display label for a category key, falling back to the key itself.
pub fn category_label(key: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}
