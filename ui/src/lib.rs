//! Shared UI crate for Tallyboard. Report models, charts, forms and views
//! live here; the `web` and `desktop` crates only add routing and launch.

pub mod core;
pub mod i18n;
pub mod reports;
pub mod transactions;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod alerts;
    pub use alerts::{show_alert, use_alerts_provider, Alert, AlertKind, AlertStack, Alerts};

    mod animated_amount;
    pub use animated_amount::AnimatedAmount;

    mod theme_toggle;
    pub use theme_toggle::{use_theme_provider, ThemeToggle};
}
