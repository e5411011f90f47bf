//! Where report data comes from on each platform.
//!
//! Web: a JSON `<script>` block embedded by the server, falling back to the
//! configured endpoint. Desktop: a JSON file named by `TALLYBOARD_DATA`, or
//! `report-data.json` in the app data directory.

use crate::core::{
    config::ReportsConfig,
    error::{UiError, UiResult},
};

use super::ReportData;

pub async fn load_report_data(config: &ReportsConfig) -> UiResult<ReportData> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(data) = embedded_report_data(&config.embedded_data_id)? {
            return Ok(data);
        }
        fetch_report_data(&config.data_endpoint).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = desktop_data_path()?;
        let raw = std::fs::read_to_string(&path)
            .map_err(|err| UiError::Fetch(format!("{}: {err}", path.display())))?;
        let _ = config;
        parse_report_data(&raw)
    }
}

pub(crate) fn parse_report_data(raw: &str) -> UiResult<ReportData> {
    serde_json::from_str(raw).map_err(|err| UiError::Fetch(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn embedded_report_data(element_id: &str) -> UiResult<Option<ReportData>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(UiError::Unavailable("document"))?;
    match document
        .get_element_by_id(element_id)
        .and_then(|el| el.text_content())
    {
        Some(raw) if !raw.trim().is_empty() => parse_report_data(&raw).map(Some),
        _ => Ok(None),
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_report_data(url: &str) -> UiResult<ReportData> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| UiError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(UiError::Fetch(format!("HTTP error! status: {}", response.status())));
    }
    response
        .json::<ReportData>()
        .await
        .map_err(|err| UiError::Fetch(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_data_path() -> UiResult<std::path::PathBuf> {
    if let Some(path) = std::env::var_os(crate::core::config::DATA_PATH_ENV) {
        return Ok(path.into());
    }
    let dirs = directories::ProjectDirs::from("com", "Tallyboard", "Tallyboard")
        .ok_or(UiError::Unavailable("data directory"))?;
    Ok(dirs.data_dir().join("report-data.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_is_a_fetch_error() {
        let err = parse_report_data("{not json").unwrap_err();
        assert!(matches!(err, UiError::Fetch(_)));
        assert!(err.to_string().starts_with("couldn't load chart data"));
    }

    #[test]
    fn empty_object_is_valid_and_empty() {
        let data = parse_report_data("{}").unwrap();
        assert_eq!(data, ReportData::default());
    }
}
