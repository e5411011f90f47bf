#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{use_alerts_provider, use_theme_provider, AppNavbar};
use ui::core::config::ReportsConfig;
use ui::views::{Dashboard, NewTransaction, Reports};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/reports")]
    Reports {},
    #[route("/transactions/new")]
    NewTransaction {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Tallyboard – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_reports(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Reports {}, "{label}" })
}
fn nav_transaction(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::NewTransaction {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; AppNavbar updates it from the locale picker.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        reports: nav_reports,
        transaction: nav_transaction,
    });

    use_context_provider(load_config);
    use_alerts_provider();
    let theme = use_theme_provider();

    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts with new strings.
        div {
            key: "{lang_code()}",
            class: "app-root",
            "data-theme": "{theme().as_str()}",
            Router::<Route> { }
        }
    }
}

/// `TALLYBOARD_CONFIG` may point at a JSON file overriding any config field.
fn load_config() -> ReportsConfig {
    let Some(path) = std::env::var_os("TALLYBOARD_CONFIG") else {
        return ReportsConfig::default();
    };
    match std::fs::read_to_string(&path).map(|raw| serde_json::from_str(&raw)) {
        Ok(Ok(config)) => config,
        Ok(Err(err)) => {
            warn!("ignoring malformed config {}: {err}", path.to_string_lossy());
            ReportsConfig::default()
        }
        Err(err) => {
            warn!("could not read config {}: {err}", path.to_string_lossy());
            ReportsConfig::default()
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop router layout around the shared `AppNavbar`.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
