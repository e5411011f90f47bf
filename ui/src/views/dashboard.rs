use dioxus::prelude::*;

use crate::reports::{use_report_page, ChartCard, ChartKind, ReportSummaryPanel};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let page = use_report_page();
    let state = page.state.read().clone();
    let placement = *page.placement.read();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { class: "page__intro", {t!("dashboard-intro")} }

            ReportSummaryPanel { summary: state.summary.clone(), period: state.period.clone() }

            div { class: "page-dashboard__chart",
                ChartCard {
                    kind: ChartKind::Expense,
                    state: state.expense.clone(),
                    placement,
                }
            }
        }
    }
}
