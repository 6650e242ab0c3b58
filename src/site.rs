use crate::error::CatalogError;
use crate::translate::FALLBACK_LOCALE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A conversion goal configured for a site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub name: String,
}

/// Read-only view of the site configuration owned by the host application.
pub trait SiteConfig {
    fn site_exists(&self, site_id: u32) -> bool;
    fn is_ecommerce_enabled(&self, site_id: u32) -> bool;
    fn goals(&self, site_id: u32) -> Vec<Goal>;
}

/// Immutable facts about one site that decide which widgets exist for it.
///
/// Contributors receive this value instead of querying site state
/// themselves, so two equal contexts always yield the same catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteContext {
    site_id: u32,
    ecommerce_enabled: bool,
    goals: Vec<Goal>,
    locale: String,
}

impl SiteContext {
    pub fn new(site_id: u32) -> Self {
        Self {
            site_id,
            ecommerce_enabled: false,
            goals: Vec::new(),
            locale: FALLBACK_LOCALE.to_string(),
        }
    }

    /// Snapshot the configuration of `site_id`.
    pub fn resolve(config: &dyn SiteConfig, site_id: u32, locale: &str) -> Result<Self, CatalogError> {
        if !config.site_exists(site_id) {
            return Err(CatalogError::UnknownSite(site_id));
        }
        Ok(Self::new(site_id)
            .with_ecommerce(config.is_ecommerce_enabled(site_id))
            .with_goals(config.goals(site_id))
            .with_locale(locale))
    }

    pub fn with_ecommerce(mut self, enabled: bool) -> Self {
        self.ecommerce_enabled = enabled;
        self
    }

    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn site_id(&self) -> u32 {
        self.site_id
    }

    pub fn is_ecommerce_enabled(&self) -> bool {
        self.ecommerce_enabled
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey(self.clone())
    }
}

/// Key under which a built catalog is memoized. Two contexts share a key
/// only when every fact relevant to the build is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(SiteContext);

impl CacheKey {
    pub fn site_id(&self) -> u32 {
        self.0.site_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ecommerce: bool,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SitesFile {
    #[serde(default)]
    sites: Vec<SiteRecord>,
}

/// In-process site configuration, e.g. loaded from a JSON fixture:
///
/// ```json
/// {"sites": [{"id": 1, "name": "shop", "ecommerce": true,
///             "goals": [{"id": 1, "name": "Thank you"}]}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySites {
    sites: BTreeMap<u32, SiteRecord>,
}

impl InMemorySites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SitesFile = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut sites = Self::new();
        for record in file.sites {
            sites.sites.insert(record.id, record);
        }
        tracing::debug!(path = %path.display(), count = sites.sites.len(), "loaded site fixtures");
        Ok(sites)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = SitesFile {
            sites: self.sites.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn add_site(&mut self, id: u32, name: &str) {
        self.sites.insert(
            id,
            SiteRecord {
                id,
                name: name.to_string(),
                ..SiteRecord::default()
            },
        );
    }

    /// Add a goal with the next free id. Returns `None` for unknown sites.
    pub fn add_goal(&mut self, site_id: u32, name: &str) -> Option<Goal> {
        let site = self.sites.get_mut(&site_id)?;
        let id = site.goals.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let goal = Goal {
            id,
            name: name.to_string(),
        };
        site.goals.push(goal.clone());
        Some(goal)
    }

    pub fn set_ecommerce(&mut self, site_id: u32, enabled: bool) -> bool {
        match self.sites.get_mut(&site_id) {
            Some(site) => {
                site.ecommerce = enabled;
                true
            }
            None => false,
        }
    }

    pub fn site(&self, site_id: u32) -> Option<&SiteRecord> {
        self.sites.get(&site_id)
    }
}

impl SiteConfig for InMemorySites {
    fn site_exists(&self, site_id: u32) -> bool {
        self.sites.contains_key(&site_id)
    }

    fn is_ecommerce_enabled(&self, site_id: u32) -> bool {
        self.sites.get(&site_id).is_some_and(|s| s.ecommerce)
    }

    fn goals(&self, site_id: u32) -> Vec<Goal> {
        self.sites
            .get(&site_id)
            .map(|s| s.goals.clone())
            .unwrap_or_default()
    }
}
