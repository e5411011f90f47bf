use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::{
    error::UiResult,
    export::{build_csv, download_bytes},
    series::CategorySeries,
};

#[cfg(target_arch = "wasm32")]
use crate::core::platform;

use super::{ChartKind, ReportsState};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

/// Page entry point: download a chart's data as `{kind}-chart-data.csv`.
///
/// Returns `Ok(None)` without doing anything when the chart has no data.
pub async fn export_chart_data(
    kind: ChartKind,
    series: Option<CategorySeries>,
) -> UiResult<Option<String>> {
    let Some(series) = series else {
        return Ok(None);
    };

    let filename = kind.export_filename();
    let csv = build_csv(&series);
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    info!(chart = kind.slug(), rows = series.len(), "exported chart data");

    Ok(Some(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    }))
}

/// Page entry point: open the host print dialog for the current view.
pub fn print_report() {
    let dialog = document::eval("window.print();");
    spawn(async move {
        if let Err(err) = dialog.await {
            warn!("print dialog failed: {err:?}");
        }
    });
}

#[component]
pub fn ReportActions(
    state: Signal<ReportsState>,
    #[props(default)] refreshing: bool,
    on_refresh: EventHandler<()>,
) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("results-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let export_handler = move |kind: ChartKind| {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_: MouseEvent| {
            if busy_signal() {
                return;
            }
            let series = state.read().chart(kind).series().cloned();
            if series.is_none() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing CSV"));

            #[cfg(target_arch = "wasm32")]
            {
                platform::spawn_future(async move {
                    let outcome = export_chart_data(kind, series).await;
                    settle(outcome, status_signal);
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(export_chart_data(kind, series));
                settle(outcome, status_signal);
                busy_signal.set(false);
            }
        }
    };

    let has_expense = state.read().expense.series().is_some();
    let has_income = state.read().income.series().is_some();

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h2 { "Export & print" }
            }

            div { class: "results-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy() || !has_expense,
                    onclick: export_handler(ChartKind::Expense),
                    "Export expenses CSV"
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy() || !has_income,
                    onclick: export_handler(ChartKind::Income),
                    "Export income CSV"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| print_report(),
                    "Print"
                }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    disabled: busy() || refreshing,
                    onclick: move |_| on_refresh.call(()),
                    "Refresh"
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn settle(outcome: UiResult<Option<String>>, mut status: Signal<ExportStatus>) {
    match outcome {
        Ok(Some(message)) => status.set(ExportStatus::Done(message)),
        Ok(None) => status.set(ExportStatus::Idle),
        Err(err) => {
            warn!("chart export failed: {err}");
            status.set(ExportStatus::Error(err.to_string()));
        }
    }
}
