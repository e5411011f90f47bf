//! Tunables for the reports and dashboard pages.
//!
//! Platform crates may provide their own [`ReportsConfig`] through Dioxus
//! context; components fall back to [`ReportsConfig::default`] otherwise.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Environment variable naming a JSON report file (desktop only).
pub const DATA_PATH_ENV: &str = "TALLYBOARD_DATA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// JSON endpoint serving [`ReportData`](crate::reports::ReportData) on web.
    pub data_endpoint: String,
    /// Id of a `<script type="application/json">` element carrying page data.
    pub embedded_data_id: String,
    pub resize_debounce_ms: u64,
    pub count_up_duration_ms: u64,
    pub count_up_frame_ms: u64,
    /// Viewport width at or above which the legend sits beside the ring.
    pub wide_layout_min_px: f64,
    pub theme_storage_key: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            data_endpoint: "/api/reports/categories".to_string(),
            embedded_data_id: "report-data".to_string(),
            resize_debounce_ms: 300,
            count_up_duration_ms: 1000,
            count_up_frame_ms: 16,
            wide_layout_min_px: 720.0,
            theme_storage_key: "theme".to_string(),
        }
    }
}

/// Config from context, or defaults when the platform didn't provide one.
pub fn use_reports_config() -> ReportsConfig {
    try_use_context::<ReportsConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ReportsConfig = serde_json::from_str(r#"{"resize_debounce_ms":150}"#).unwrap();
        assert_eq!(cfg.resize_debounce_ms, 150);
        assert_eq!(cfg.count_up_frame_ms, 16);
        assert_eq!(cfg.theme_storage_key, "theme");
    }
}
