use std::collections::BTreeSet;

/// Every translated bundle must define each message the en-US bundle does,
/// and no bundle may define a message twice.
#[test]
fn locales_cover_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/tallyboard-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/tallyboard-ui.ftl");

    let fallback = message_ids(EN_US, "en-US");
    assert!(!fallback.is_empty(), "en-US bundle has no messages");

    let locales: &[(&str, &str)] = &[("es-ES", ES_ES)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        let ids = message_ids(src, locale);
        let missing: Vec<&str> = fallback.difference(&ids).map(String::as_str).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn every_key_used_by_views_exists() {
    const EN_US: &str = include_str!("../i18n/en-US/tallyboard-ui.ftl");
    let ids = message_ids(EN_US, "en-US");
    for key in [
        "nav-dashboard",
        "nav-reports",
        "nav-transaction",
        "nav-language-label",
        "tagline",
        "dashboard-title",
        "reports-title",
        "transaction-title",
    ] {
        assert!(ids.contains(key), "en-US is missing {key}");
    }
}

/// Message ids of a Fluent source: `id = value` lines, ignoring comments,
/// attributes and continuation lines. Panics on duplicates.
fn message_ids(src: &str, locale: &str) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for line in src.lines() {
        if line.starts_with([' ', '\t', '#', '.']) {
            continue;
        }
        let Some((id, _)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) || id.starts_with(['[', '-']) {
            continue;
        }
        assert!(ids.insert(id.to_string()), "{locale} defines {id} twice");
    }
    ids
}
