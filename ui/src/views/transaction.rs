use dioxus::prelude::*;
use tracing::warn;

use crate::components::{show_alert, AlertKind, AlertStack};
use crate::core::{config::use_reports_config, format::format_currency};
use crate::reports::load_report_data;
use crate::t;
use crate::transactions::{TransactionFormView, ValidTransaction};

#[component]
pub fn NewTransaction() -> Element {
    let config = use_reports_config();
    let categories = use_resource(move || {
        let config = config.clone();
        async move {
            match load_report_data(&config).await {
                Ok(data) => data.categories,
                Err(err) => {
                    warn!("Could not load categories: {err}");
                    Vec::new()
                }
            }
        }
    });

    let on_submit = move |tx: ValidTransaction| {
        show_alert(
            format!(
                "{} {} saved: {}",
                tx.kind.display_name(),
                format_currency(tx.amount),
                tx.description
            ),
            AlertKind::Success,
        );
    };

    rsx! {
        section { class: "page page-transaction",
            h1 { {t!("transaction-title")} }
            p { class: "page__intro", {t!("transaction-intro")} }

            AlertStack {}

            match categories.read().as_ref() {
                Some(options) => rsx! {
                    TransactionFormView { categories: options.clone(), on_submit }
                },
                None => rsx! {
                    div { class: "loading-state", "Loading categories..." }
                },
            }
        }
    }
}
