use dioxus::prelude::*;

use super::{ChartKind, ChartState, DoughnutChart, LegendPlacement};

#[component]
pub fn ChartCard(kind: ChartKind, state: ChartState, placement: LegendPlacement) -> Element {
    let (title, empty_title, empty_text) = match kind {
        ChartKind::Expense => (
            "Expenses by category",
            "No Expense Data",
            "No expense transactions found for this period",
        ),
        ChartKind::Income => (
            "Income by category",
            "No Income Data",
            "No income transactions found for this period",
        ),
    };

    let meta = match &state {
        ChartState::Ready { breakdown, .. } => Some(format!(
            "{} categories · {}",
            breakdown.len(),
            breakdown.total_label()
        )),
        _ => None,
    };

    rsx! {
        section { class: "results-card chart-card chart-card--{kind.slug()}",
            div { class: "results-card__header",
                h2 { "{title}" }
                if let Some(meta) = meta {
                    span { class: "results-card__meta", "{meta}" }
                }
            }

            div { class: "chart-container",
                match state {
                    ChartState::Ready { breakdown, .. } => rsx! {
                        DoughnutChart { kind, breakdown, placement }
                    },
                    ChartState::Loading => rsx! {
                        div { class: "loading-state",
                            div { class: "loading-spinner", aria_hidden: "true" }
                            div { class: "loading-text", "Loading chart data..." }
                        }
                    },
                    ChartState::Empty => rsx! {
                        div { class: "no-data-state",
                            div { class: "no-data-icon", aria_hidden: "true" }
                            div { class: "no-data-title", "{empty_title}" }
                            div { class: "no-data-text", "{empty_text}" }
                        }
                    },
                }
            }
        }
    }
}
