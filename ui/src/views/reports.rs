use dioxus::prelude::*;

use crate::components::AlertStack;
use crate::reports::{use_report_page, ChartCard, ChartKind, ReportActions, ReportSummaryPanel};
use crate::t;

/// Category breakdown page: both doughnuts, totals, export and print.
#[component]
pub fn Reports() -> Element {
    let page = use_report_page();
    let state = page.state.read().clone();
    let placement = *page.placement.read();
    let refresh = page.refresh;

    rsx! {
        section { class: "page page-reports",
            h1 { {t!("reports-title")} }
            p { class: "page__intro", {t!("reports-intro")} }

            AlertStack {}

            ReportSummaryPanel { summary: state.summary.clone(), period: state.period.clone() }

            div { class: "page-reports__charts",
                for kind in ChartKind::ALL {
                    ChartCard {
                        key: "{kind.slug()}",
                        kind,
                        state: state.chart(kind).clone(),
                        placement,
                    }
                }
            }

            ReportActions {
                state: page.state,
                refreshing: page.is_reloading(),
                on_refresh: move |_| refresh.call(true),
            }
        }
    }
}
