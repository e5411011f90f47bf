//! Light/dark theme flag persisted between sessions.

use serde::{Deserialize, Serialize};

use super::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn from_attr(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored theme, defaulting to light when nothing (or garbage) is stored.
pub fn load_theme(key: &str) -> Theme {
    storage::load::<String>(key)
        .map(|raw| Theme::from_attr(&raw))
        .unwrap_or_default()
}

/// Flip `current`, persist the result under `key`, and return it.
pub fn toggle_theme(key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    storage::save(key, next.as_str());
    next
}
