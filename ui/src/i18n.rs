//! Localization for `tallyboard-ui`.
//!
//! Fluent bundles live under `i18n/<lang-id>/tallyboard-ui.ftl` and are
//! embedded at compile time with `rust-embed`; `i18n-embed` picks the
//! language from the OS (desktop) or `navigator.languages` (web), falling
//! back to `en-US`. Components look strings up with [`t!`](crate::t).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Look up a message through the shared [`LOADER`]:
/// `t!("nav-reports")`, or with arguments `t!("key", name = value)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; every locale ships `i18n/<lang>/{DOMAIN}.ftl`.
const DOMAIN: &str = "tallyboard-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted, for the language picker.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_languages_include_fallback_and_spanish() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn manifest_domain_matches_bundle_name() {
        let manifest = include_str!("../i18n.toml");
        assert!(manifest.contains(&format!("domain = \"{DOMAIN}\"")));
        assert!(Localizations::get(&format!("en-US/{DOMAIN}.ftl")).is_some());
    }

    #[test]
    fn nav_labels_resolve_in_fallback() {
        init();
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), "Dashboard");
        assert_eq!(fl!(&*LOADER, "nav-reports"), "Reports");
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let before = fl!(&*LOADER, "nav-dashboard");
        let _ = set_language("zz-ZZ");
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), before);
    }
}
