//! Small persistent key/value store for UI preferences.
//!
//! Web builds use `window.localStorage`; desktop builds keep one JSON file per
//! key under the platform data directory. Values are stored as JSON text.

use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

use super::error::{UiError, UiResult};

/// Serialise `data` as JSON and persist it under `key`. Failures are logged, not raised.
pub fn save<T: Serialize + ?Sized>(key: &str, data: &T) {
    if let Err(err) = try_save(key, data) {
        error!("Error saving to local storage: {err}");
    }
}

/// Load and decode the value stored under `key`. Missing or undecodable entries yield `None`.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    match try_load(key) {
        Ok(value) => value,
        Err(err) => {
            error!("Error loading from local storage: {err}");
            None
        }
    }
}

pub fn try_save<T: Serialize + ?Sized>(key: &str, data: &T) -> UiResult<()> {
    let json = serde_json::to_string(data)?;
    write_raw(key, &json)
}

pub fn try_load<T: DeserializeOwned>(key: &str) -> UiResult<Option<T>> {
    match read_raw(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> UiResult<web_sys::Storage> {
    web_sys::window()
        .ok_or(UiError::Unavailable("window"))?
        .local_storage()
        .map_err(|_| UiError::Storage("localStorage access denied".into()))?
        .ok_or(UiError::Unavailable("localStorage"))
}

#[cfg(target_arch = "wasm32")]
fn write_raw(key: &str, value: &str) -> UiResult<()> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| UiError::Storage(format!("couldn't write `{key}`")))
}

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> UiResult<Option<String>> {
    local_storage()?
        .get_item(key)
        .map_err(|_| UiError::Storage(format!("couldn't read `{key}`")))
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path(key: &str) -> UiResult<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "Tallyboard", "Tallyboard")
        .ok_or(UiError::Unavailable("data directory"))?;
    let safe: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    Ok(dirs.data_dir().join("settings").join(format!("{safe}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(key: &str, value: &str) -> UiResult<()> {
    let path = settings_path(key)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, value)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw(key: &str) -> UiResult<Option<String>> {
    let path = settings_path(key)?;
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}
