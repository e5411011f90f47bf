use dioxus::prelude::*;

use crate::core::{
    config::use_reports_config,
    theme::{self, Theme},
};

/// Load the persisted theme once and share it with the subtree.
pub fn use_theme_provider() -> Signal<Theme> {
    let key = use_reports_config().theme_storage_key;
    use_context_provider(move || Signal::new(theme::load_theme(&key)))
}

#[component]
pub fn ThemeToggle() -> Element {
    let key = use_reports_config().theme_storage_key;
    let Some(mut current) = try_use_context::<Signal<Theme>>() else {
        return rsx! {};
    };

    let label = match current() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    rsx! {
        button {
            r#type: "button",
            class: "button button--ghost theme-toggle",
            aria_pressed: current() == Theme::Dark,
            onclick: move |_| {
                let next = theme::toggle_theme(&key, current());
                current.set(next);
            },
            "{label}"
        }
    }
}
