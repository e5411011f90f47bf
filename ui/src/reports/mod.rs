mod doughnut;
pub use doughnut::{DoughnutChart, LegendPlacement};

mod chart_card;
pub use chart_card::ChartCard;

mod summary;
pub use summary::ReportSummaryPanel;

mod source;
pub use source::load_report_data;

mod export;
pub use export::{export_chart_data, print_report, ReportActions};

mod page;
pub use page::{use_report_page, ReportPage};

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{
    breakdown::Breakdown,
    palette::Palette,
    series::{self, CategorySeries, RawSeries},
};
use crate::transactions::CategoryOption;

/// Page data for the reports view, as rendered by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportData {
    pub expense: RawSeries,
    pub income: RawSeries,
    pub summary: Option<ReportSummary>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Categories offered by the transaction form.
    pub categories: Vec<CategoryOption>,
}

/// Period totals. Signs are kept (net savings can be negative).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSummary {
    pub total_income: serde_json::Value,
    pub total_expenses: serde_json::Value,
    pub net_savings: serde_json::Value,
}

impl ReportSummary {
    pub fn income(&self) -> f64 {
        finite_or_zero(series::coerce_number(&self.total_income))
    }

    pub fn expenses(&self) -> f64 {
        finite_or_zero(series::coerce_number(&self.total_expenses))
    }

    pub fn net(&self) -> f64 {
        finite_or_zero(series::coerce_number(&self.net_savings))
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Expense,
    Income,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Expense, ChartKind::Income];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// DOM id of the chart mount point.
    pub fn mount_id(self) -> String {
        format!("{}Chart", self.slug())
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Expense => Palette::expense(),
            Self::Income => Palette::income(),
        }
    }

    pub fn export_filename(self) -> String {
        format!("{}-chart-data.csv", self.slug())
    }
}

/// What a chart mount currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChartState {
    #[default]
    Empty,
    Loading,
    Ready {
        series: CategorySeries,
        breakdown: Breakdown,
    },
}

impl ChartState {
    /// Ready when at least one slice survives; empty otherwise.
    pub fn from_series(kind: ChartKind, series: CategorySeries) -> Self {
        match Breakdown::from_series(&series, &kind.palette()) {
            Some(breakdown) => Self::Ready { series, breakdown },
            None => Self::Empty,
        }
    }

    pub fn series(&self) -> Option<&CategorySeries> {
        match self {
            Self::Ready { series, .. } => Some(series),
            _ => None,
        }
    }
}

/// Chart states for the reports page plus the loaded summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportsState {
    pub expense: ChartState,
    pub income: ChartState,
    pub summary: Option<ReportSummary>,
    pub period: Option<(String, String)>,
}

impl ReportsState {
    pub fn chart(&self, kind: ChartKind) -> &ChartState {
        match kind {
            ChartKind::Expense => &self.expense,
            ChartKind::Income => &self.income,
        }
    }

    pub fn chart_mut(&mut self, kind: ChartKind) -> &mut ChartState {
        match kind {
            ChartKind::Expense => &mut self.expense,
            ChartKind::Income => &mut self.income,
        }
    }

    pub fn from_data(data: &ReportData) -> Self {
        let mut state = Self::default();
        state.initialize(&data.expense, &data.income);
        state.summary = data.summary.clone();
        state.period = data.start_date.clone().zip(data.end_date.clone());
        state
    }

    /// Normalize both payloads and settle each chart on `Ready` or `Empty`.
    pub fn initialize(&mut self, expense: &RawSeries, income: &RawSeries) {
        for (kind, raw) in [(ChartKind::Expense, expense), (ChartKind::Income, income)] {
            let cleaned = series::normalize(raw);
            info!(
                chart = kind.slug(),
                categories = cleaned.len(),
                "initializing chart"
            );
            let next = ChartState::from_series(kind, cleaned);
            if matches!(next, ChartState::Empty) {
                info!(chart = kind.slug(), "no chart data available");
            }
            *self.chart_mut(kind) = next;
        }
    }

    pub fn show_loading(&mut self) {
        for kind in ChartKind::ALL {
            *self.chart_mut(kind) = ChartState::Loading;
        }
    }
}

/// Page entry point: render both charts from server-supplied series.
pub fn initialize_charts(mut state: Signal<ReportsState>, expense: &RawSeries, income: &RawSeries) {
    state.with_mut(|s| s.initialize(expense, income));
}

/// Page entry point: swap every chart for the loading placeholder.
pub fn show_loading_state(mut state: Signal<ReportsState>) {
    state.with_mut(ReportsState::show_loading);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_values_settle_on_empty_state() {
        let mut state = ReportsState::default();
        state.initialize(
            &RawSeries::new(["A", "B", "C"], [0, 0, 0]),
            &RawSeries::new(["Salary"], [json!("3000")]),
        );
        assert_eq!(state.expense, ChartState::Empty);
        let income = state.income.series().expect("income ready");
        assert_eq!(income.values, vec![3000.0]);
    }

    #[test]
    fn loading_replaces_every_chart() {
        let mut state = ReportsState::default();
        state.initialize(&RawSeries::new(["A"], [1]), &RawSeries::new(["B"], [2]));
        state.show_loading();
        assert!(ChartKind::ALL
            .iter()
            .all(|kind| *state.chart(*kind) == ChartState::Loading));
    }

    #[test]
    fn report_data_reads_camel_case_payload() {
        let data: ReportData = serde_json::from_value(json!({
            "expense": { "labels": ["Rent", "Food"], "values": [1200, "80.5"] },
            "income": { "labels": ["Salary"] },
            "summary": { "totalIncome": "3000", "totalExpenses": 1280.5, "netSavings": -20 },
            "startDate": "2025-01-01",
            "endDate": "2025-01-31"
        }))
        .unwrap();

        let state = ReportsState::from_data(&data);
        assert_eq!(
            state.expense.series().map(|s| s.values.clone()),
            Some(vec![1200.0, 80.5])
        );
        assert_eq!(state.income, ChartState::Empty);
        let summary = state.summary.expect("summary");
        assert_eq!(summary.income(), 3000.0);
        assert_eq!(summary.net(), -20.0);
        assert_eq!(
            state.period,
            Some(("2025-01-01".to_string(), "2025-01-31".to_string()))
        );
    }

    #[test]
    fn kinds_map_to_mounts_and_filenames() {
        assert_eq!(ChartKind::Expense.mount_id(), "expenseChart");
        assert_eq!(ChartKind::Income.export_filename(), "income-chart-data.csv");
    }
}
