#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop shell embeds `ui/assets/theme/main.css` with `include_str!`, so a renamed
or dropped class only degrades styling at runtime. This checks that the selectors the
dashboard components rely on are still present.

When a component's markup changes class names, update REQUIRED_SELECTORS too.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".navbar__inner",
    ".navbar__link",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Request forms, loading indicator, notices
    ".dashboard__forms",
    ".dashboard__form",
    ".dashboard__notice",
    ".dashboard__loading",
    ".dashboard__spinner",
    // Cards
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__meta--error",
    ".results-card__placeholder",
    // Metric cards
    ".results-highlights",
    ".results-highlight",
    ".results-highlight__label",
    ".results-highlight__value",
    ".results-highlight__meta",
    // Charts
    ".results-chart__title",
    ".results-chart__kinds",
    ".results-chart__canvas",
    // Table
    ".results-table__scroll",
    ".results-table__grid",
    ".results-table__heading",
    ".results-table__row",
    // Export panel
    ".results-export__summary",
    ".results-export__actions",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn export_feedback_modifiers_are_paired() {
    let has_success = THEME_CSS.contains(".results-card__meta--success");
    let has_error = THEME_CSS.contains(".results-card__meta--error");
    assert!(
        has_success && has_error,
        "Export feedback modifiers missing (success: {has_success}, error: {has_error})"
    );
}
