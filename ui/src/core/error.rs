//! Error type shared by the platform-facing helpers (storage, export, data loading).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("couldn't serialise value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("export failed: {0}")]
    Export(String),
    #[error("couldn't load chart data: {0}")]
    Fetch(String),
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type UiResult<T> = Result<T, UiError>;
