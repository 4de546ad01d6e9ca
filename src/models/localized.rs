use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Locale used when none of the caller's preferred locales has an entry.
pub const DEFAULT_LOCALE: &str = "en-GB";

/// Neither a preferred locale nor the default locale had an entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no localization for any of {preferred:?} or default locale {default}")]
pub struct MissingLocalization {
    pub preferred: Vec<String>,
    pub default: String,
}

/// Text keyed by locale tag (e.g. "en-GB", "de-DE")
///
/// Immutable once built. Lookups match tags exactly: "de-DE" never falls back
/// to "de".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedTextMap(BTreeMap<String, String>);

impl LocalizedTextMap {
    /// Resolve text for the first matching preferred locale, falling back to
    /// [`DEFAULT_LOCALE`]
    pub fn resolve<S: AsRef<str>>(&self, preferred: &[S]) -> Result<&str, MissingLocalization> {
        self.resolve_with_default(preferred, DEFAULT_LOCALE)
    }

    /// Same as [`resolve`](Self::resolve) with a caller-chosen default locale
    pub fn resolve_with_default<S: AsRef<str>>(
        &self,
        preferred: &[S],
        default_locale: &str,
    ) -> Result<&str, MissingLocalization> {
        preferred
            .iter()
            .find_map(|locale| self.get(locale.as_ref()))
            .or_else(|| self.get(default_locale))
            .ok_or_else(|| MissingLocalization {
                preferred: preferred.iter().map(|l| l.as_ref().to_string()).collect(),
                default: default_locale.to_string(),
            })
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedTextMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
