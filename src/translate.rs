use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Locale used when a key is missing from the requested locale.
pub const FALLBACK_LOCALE: &str = "en";

/// Resolves display labels. Implementations must be pure: the same key and
/// locale always produce the same text.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, locale: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn translate(&self, key: &str, locale: &str) -> String {
        self(key, locale)
    }
}

/// Translator that leaves every key untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, key: &str, _locale: &str) -> String {
        key.to_string()
    }
}

/// Translation table keyed by locale then key, e.g.
/// `{"en": {"SEO_SeoRankings": "SEO Rankings"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    locales: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    /// Load a translation table. An empty file yields an empty table; a
    /// missing or unreadable one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn insert(&mut self, locale: &str, key: &str, text: &str) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl Translator for Translations {
    fn translate(&self, key: &str, locale: &str) -> String {
        self.lookup(key, locale)
            .or_else(|| self.lookup(key, FALLBACK_LOCALE))
            .unwrap_or(key)
            .to_string()
    }
}
