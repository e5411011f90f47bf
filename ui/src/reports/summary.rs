use dioxus::prelude::*;

use crate::components::AnimatedAmount;
use crate::core::format::format_date;

use super::ReportSummary;

#[component]
pub fn ReportSummaryPanel(summary: Option<ReportSummary>, period: Option<(String, String)>) -> Element {
    let period_label = period
        .as_ref()
        .map(|(start, end)| format!("{} – {}", format_date(start), format_date(end)));

    rsx! {
        section { class: "results-card results-charts",
            div { class: "results-card__header",
                h2 { "Summary" }
                if let Some(label) = period_label {
                    span { class: "results-card__meta", "{label}" }
                }
            }

            match summary {
                None => rsx! {
                    p { class: "results-card__placeholder", "Totals appear once report data has loaded." }
                },
                Some(summary) => {
                    let net = summary.net();
                    let net_class = if net < 0.0 { "amount--negative" } else { "amount--positive" };
                    rsx! {
                        div { class: "results-highlights",
                            div { class: "results-highlight",
                                span { class: "results-highlight__label", "Income" }
                                AnimatedAmount { id: "income-amount", value: summary.income(), class: "results-highlight__value" }
                            }
                            div { class: "results-highlight",
                                span { class: "results-highlight__label", "Expenses" }
                                AnimatedAmount { id: "expense-amount", value: summary.expenses(), class: "results-highlight__value" }
                            }
                            div { class: "results-highlight",
                                span { class: "results-highlight__label", "Balance" }
                                AnimatedAmount { id: "balance-amount", value: net, class: "results-highlight__value {net_class}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
