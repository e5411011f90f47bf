#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css`; a dropped selector
//! only shows up as broken styling at runtime, so check the ones the shared
//! components rely on here.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "[data-theme=\"dark\"]",
    "body {",
    ".page {",
    ".button--primary",
    ".button--ghost",
    // Cards & summary
    ".results-card",
    ".results-card__header",
    ".results-highlights",
    ".results-highlight__value",
    ".results-export__actions",
    // Doughnut charts
    ".chart-container",
    ".doughnut--legend-right",
    ".doughnut--legend-bottom",
    ".doughnut__center",
    ".doughnut__legend-swatch",
    ".loading-state",
    ".no-data-state",
    // Alerts & form
    ".alert--success",
    ".alert--danger",
    ".was-validated .invalid-feedback",
    "@media (max-width: 720px)",
    "@media print",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();
    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in ui/assets/theme/main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn theme_is_not_truncated() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "theme has only {non_ws_len} non-whitespace chars; was it truncated?"
    );
}

#[test]
fn navbar_styles_cover_links() {
    for sel in [".navbar {", ".navbar__link", ".navbar__locale"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css is missing {sel}");
    }
}
