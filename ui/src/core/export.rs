//! Chart data export: CSV building and file delivery.

use super::error::{UiError, UiResult};
use super::series::CategorySeries;

/// Two-column CSV of a chart's data: `Category,Amount` then one quoted row per slice.
pub fn build_csv(series: &CategorySeries) -> String {
    let mut csv = String::from("Category,Amount\n");
    for (label, amount) in series.iter() {
        csv.push_str(&quote(label));
        csv.push(',');
        csv.push_str(&quote(&amount.to_string()));
        csv.push('\n');
    }
    csv
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Hand `bytes` to the user as a file called `filename`.
///
/// Web triggers a browser download and returns `None`; desktop writes into the
/// app's export directory and returns the written path.
pub async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> UiResult<Option<String>> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| UiError::Export("failed to create blob".into()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| UiError::Export("unable to create download".into()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(UiError::Unavailable("document"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| UiError::Export("unable to create anchor".into()))?
            .dyn_into()
            .map_err(|_| UiError::Export("anchor cast failed".into()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or(UiError::Unavailable("document body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = desktop_export_dir()?;
        std::fs::create_dir_all(&dir).map_err(|err| UiError::Export(err.to_string()))?;
        let path = dir.join(filename);
        std::fs::write(&path, &bytes).map_err(|err| UiError::Export(err.to_string()))?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> UiResult<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "Tallyboard", "Tallyboard")
        .ok_or(UiError::Unavailable("export directory"))?;
    Ok(dirs.data_dir().join("exports"))
}
