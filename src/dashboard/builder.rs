use crate::dashboard::Catalog;
use crate::error::CatalogBuildError;
use crate::plugin::{ContributorManager, WidgetContext};
use crate::settings::{HiddenWidget, Settings};
use crate::site::SiteContext;
use crate::translate::{NoTranslation, Translations, Translator};
use std::sync::Arc;

/// Assembles a fresh [`Catalog`] for a site from every registered contributor.
///
/// Contributors run in registration order and their widgets are added in the
/// order they are returned. If any contributor fails the whole build fails;
/// a partial catalog would silently hide widgets from the dashboard.
pub struct CatalogBuilder {
    contributors: ContributorManager,
    translator: Arc<dyn Translator>,
    hidden: Vec<HiddenWidget>,
}

impl CatalogBuilder {
    pub fn new(contributors: ContributorManager) -> Self {
        Self {
            contributors,
            translator: Arc::new(NoTranslation),
            hidden: Vec::new(),
        }
    }

    /// Builder with every built-in contributor and no translations.
    pub fn with_defaults() -> Self {
        Self::new(ContributorManager::with_defaults())
    }

    /// Builder configured from settings: enabled contributors, hidden widgets
    /// and the translation table.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let translator: Arc<dyn Translator> = match &settings.translations_file {
            Some(path) => Arc::new(Translations::load(path)?),
            None => Arc::new(NoTranslation),
        };
        Ok(Self::new(settings.contributors())
            .with_translator(translator)
            .with_hidden_widgets(settings.hidden_widgets.clone()))
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_hidden_widgets(mut self, hidden: Vec<HiddenWidget>) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn contributors(&self) -> &ContributorManager {
        &self.contributors
    }

    pub fn build(&self, site: &SiteContext) -> Result<Catalog, CatalogBuildError> {
        let ctx = WidgetContext::new(site, self.translator.as_ref());
        let mut catalog = Catalog::new();
        for contributor in self.contributors.iter() {
            let widgets = contributor.widgets(&ctx).map_err(|err| {
                tracing::warn!(
                    contributor = contributor.name(),
                    site_id = site.site_id(),
                    error = %err,
                    "widget contributor failed; aborting catalog build"
                );
                CatalogBuildError::from_contributor(contributor.name(), err)
            })?;
            tracing::debug!(
                contributor = contributor.name(),
                count = widgets.len(),
                "collected widgets"
            );
            catalog.add_widgets(widgets);
        }
        for contributor in self.contributors.iter() {
            contributor.filter_widgets(&mut catalog, &ctx);
        }
        self.apply_hidden(&mut catalog);
        tracing::debug!(
            site_id = site.site_id(),
            categories = catalog.category_len(),
            widgets = catalog.len(),
            "built widget catalog"
        );
        Ok(catalog)
    }

    fn apply_hidden(&self, catalog: &mut Catalog) {
        for rule in &self.hidden {
            match &rule.name {
                Some(name) => catalog.remove(&rule.category, name),
                None => catalog.remove_category(&rule.category),
            };
        }
    }
}
