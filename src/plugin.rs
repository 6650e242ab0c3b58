use crate::dashboard::{Catalog, WidgetDescriptor};
use crate::error::WidgetError;
use crate::site::SiteContext;
use crate::translate::Translator;
use std::collections::HashSet;

/// Everything a contributor may look at while producing widgets.
pub struct WidgetContext<'a> {
    pub site: &'a SiteContext,
    pub translator: &'a dyn Translator,
}

impl<'a> WidgetContext<'a> {
    pub fn new(site: &'a SiteContext, translator: &'a dyn Translator) -> Self {
        Self { site, translator }
    }

    /// Build a descriptor with labels resolved for the site's locale.
    pub fn widget(
        &self,
        category: &str,
        name: &str,
        module: &str,
        action: &str,
    ) -> Result<WidgetDescriptor, WidgetError> {
        WidgetDescriptor::new(category, name, module, action)
            .map(|w| w.localized(self.translator, self.site.locale()))
    }

    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key, self.site.locale())
    }
}

/// A feature area that contributes widgets to the catalog.
///
/// `widgets` must be a pure function of the context: it must not touch the
/// catalog and must return the same descriptors for equal contexts.
pub trait Contributor: Send + Sync {
    /// Name of the contributor
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Return the widgets this feature area offers for the site.
    fn widgets(&self, ctx: &WidgetContext<'_>) -> anyhow::Result<Vec<WidgetDescriptor>>;

    /// Adjust the assembled catalog after every contributor has added its
    /// widgets.
    fn filter_widgets(&self, _catalog: &mut Catalog, _ctx: &WidgetContext<'_>) {}
}

/// Ordered registry of contributors. Registration order decides the order
/// in which categories and widgets appear.
#[derive(Default)]
pub struct ContributorManager {
    contributors: Vec<Box<dyn Contributor>>,
}

impl ContributorManager {
    pub fn new() -> Self {
        Self {
            contributors: Vec::new(),
        }
    }

    /// Manager holding the built-in contributors in display order.
    pub fn with_defaults() -> Self {
        let mut manager = Self::new();
        for contributor in crate::plugins::builtin_contributors() {
            manager.register(contributor);
        }
        manager
    }

    pub fn register(&mut self, contributor: Box<dyn Contributor>) {
        if self.contains(contributor.name()) {
            tracing::warn!(
                contributor = contributor.name(),
                "contributor registered twice; its widgets will be added twice"
            );
        }
        self.contributors.push(contributor);
    }

    /// Keep only the contributors listed in `enabled`.
    pub fn retain_enabled(&mut self, enabled: &HashSet<String>) {
        self.contributors.retain(|c| {
            let keep = enabled.contains(c.name());
            if !keep {
                tracing::debug!(contributor = c.name(), "contributor disabled by settings");
            }
            keep
        });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contributors.iter().any(|c| c.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.contributors.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Contributor + 'static)> + '_ {
        self.contributors.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }
}
