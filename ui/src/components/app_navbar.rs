use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::components::ThemeToggle;
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Link factories registered by the launcher crate, which owns the `Route`
/// enum. Each receives the localized label and renders a single `Link`.
///
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///     reports: |label| rsx!( Link { class: "navbar__link", to: Route::Reports {}, "{label}" } ),
///     transaction: |label| rsx!( Link { class: "navbar__link", to: Route::NewTransaction {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub reports: fn(label: &str) -> Element,
    pub transaction: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("nav builder already registered");
    }
}

/// Top bar: brand, page links, theme toggle and (with more than one bundle)
/// a language picker. `children` stand in for the links when no
/// [`NavBuilder`] was registered.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let languages = use_hook(i18n::available_languages);
    let mut selected = use_signal(|| "en-US".to_string());
    // Launchers may share a language signal so the whole tree re-renders.
    let shared_lang = try_use_context::<Signal<String>>();
    let active_lang = shared_lang.map(|lang| lang()).unwrap_or_else(|| selected());

    let pick_language = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                debug!(lang = %tag, "language switched");
                selected.set(tag.clone());
                if let Some(mut lang) = shared_lang {
                    lang.set(tag);
                }
            }
            Err(err) => debug!(lang = %tag, "language switch failed: {err}"),
        }
    };

    let links = match NAV_BUILDER.get() {
        Some(nav) => rsx! {
            {(nav.dashboard)(&t!("nav-dashboard"))}
            {(nav.reports)(&t!("nav-reports"))}
            {(nav.transaction)(&t!("nav-transaction"))}
        },
        None => children,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar", lang: "{active_lang}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Tallyboard" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links", {links} }

                ThemeToggle {}

                if languages.len() > 1 {
                    div { class: "navbar__locale",
                        label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
                        select {
                            id: "locale-select",
                            value: "{active_lang}",
                            oninput: pick_language,
                            for code in languages.iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
