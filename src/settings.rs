use crate::dashboard::cache::DEFAULT_CAPACITY;
use crate::plugin::ContributorManager;
use crate::translate::FALLBACK_LOCALE;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Widget removed from every catalog after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenWidget {
    pub category: String,
    /// Name or unique id of the widget. When absent the whole category is
    /// hidden.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// When enabled the logger is initialised at debug level and honours
    /// `RUST_LOG`.
    #[serde(default)]
    pub debug_logging: bool,
    /// Also write logs to this file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Maximum number of site catalogs kept in memory.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Set of contributor names which should be enabled. If `None`, all
    /// built-in contributors are enabled.
    #[serde(default)]
    pub enabled_contributors: Option<HashSet<String>>,
    #[serde(default)]
    pub hidden_widgets: Vec<HiddenWidget>,
    /// JSON translation table, `{locale: {key: text}}`.
    #[serde(default)]
    pub translations_file: Option<PathBuf>,
}

fn default_cache_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_locale() -> String {
    FALLBACK_LOCALE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            cache_capacity: default_cache_capacity(),
            default_locale: default_locale(),
            enabled_contributors: None,
            hidden_widgets: Vec::new(),
            translations_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk. A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Built-in contributors filtered by `enabled_contributors`.
    pub fn contributors(&self) -> ContributorManager {
        let mut manager = ContributorManager::with_defaults();
        if let Some(enabled) = &self.enabled_contributors {
            for name in enabled {
                if !manager.contains(name) {
                    tracing::warn!(contributor = %name, "unknown contributor in settings");
                }
            }
            manager.retain_enabled(enabled);
        }
        manager
    }
}
