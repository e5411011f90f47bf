use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{use_alerts_provider, use_theme_provider, AppNavbar};
use ui::core::config::ReportsConfig;
use ui::views::{Dashboard, NewTransaction, Reports};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_reports(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Reports {}, "{label}" })
}
fn nav_transaction(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::NewTransaction {}, "{label}" })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        reports: nav_reports,
        transaction: nav_transaction,
    });

    use_context_provider(ReportsConfig::default);
    use_alerts_provider();
    let theme = use_theme_provider();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div { class: "app-root", "data-theme": "{theme().as_str()}",
            Router::<Route> {}
        }
    }
}

/// Web router layout around the shared `AppNavbar`.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
