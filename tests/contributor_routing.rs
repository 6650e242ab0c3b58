use std::collections::HashSet;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use widget_catalog::dashboard::{Catalog, CatalogBuilder, WidgetDescriptor};
use widget_catalog::plugin::{Contributor, ContributorManager, WidgetContext};
use widget_catalog::plugins::{live::LiveContributor, visitors};
use widget_catalog::settings::Settings;
use widget_catalog::site::SiteContext;

struct FixedContributor {
    name: &'static str,
    category: &'static str,
    actions: &'static [&'static str],
    calls: Arc<AtomicUsize>,
}

impl FixedContributor {
    fn new(
        name: &'static str,
        category: &'static str,
        actions: &'static [&'static str],
        calls: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            name,
            category,
            actions,
            calls,
        }
    }
}

impl Contributor for FixedContributor {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "test"
    }

    fn widgets(&self, ctx: &WidgetContext<'_>) -> anyhow::Result<Vec<WidgetDescriptor>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut widgets = Vec::new();
        for action in self.actions {
            widgets.push(ctx.widget(self.category, action, self.name, action)?);
        }
        Ok(widgets)
    }
}

/// Drops every widget of one module once all widgets are in.
struct ModuleFilter(&'static str);

impl Contributor for ModuleFilter {
    fn name(&self) -> &str {
        "module_filter"
    }

    fn widgets(&self, _ctx: &WidgetContext<'_>) -> anyhow::Result<Vec<WidgetDescriptor>> {
        Ok(Vec::new())
    }

    fn filter_widgets(&self, catalog: &mut Catalog, _ctx: &WidgetContext<'_>) {
        catalog.retain(|w| w.module() != self.0);
    }
}

#[test]
fn every_contributor_is_called_once_per_build() {
    let a = Arc::new(AtomicUsize::new(0));
    let b = Arc::new(AtomicUsize::new(0));
    let mut manager = ContributorManager::new();
    manager.register(Box::new(FixedContributor::new("a", "Shared", &["one"], a.clone())));
    manager.register(Box::new(FixedContributor::new("b", "Shared", &["two"], b.clone())));
    let builder = CatalogBuilder::new(manager);

    builder.build(&SiteContext::new(1)).unwrap();
    builder.build(&SiteContext::new(1)).unwrap();

    assert_eq!(a.load(Ordering::SeqCst), 2);
    assert_eq!(b.load(Ordering::SeqCst), 2);
}

#[test]
fn registration_order_decides_widget_order() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut manager = ContributorManager::new();
    manager.register(Box::new(FixedContributor::new(
        "late",
        "Shared",
        &["z1", "z2"],
        calls.clone(),
    )));
    manager.register(Box::new(FixedContributor::new(
        "other",
        "Other",
        &["o1"],
        calls.clone(),
    )));
    manager.register(Box::new(FixedContributor::new(
        "early",
        "Shared",
        &["a1"],
        calls.clone(),
    )));
    assert_eq!(manager.names(), vec!["late", "other", "early"]);

    let catalog = CatalogBuilder::new(manager)
        .build(&SiteContext::new(1))
        .unwrap();
    assert_eq!(catalog.category_names(), vec!["Shared", "Other"]);
    let shared: Vec<&str> = catalog
        .category("Shared")
        .unwrap()
        .iter()
        .map(|w| w.action())
        .collect();
    assert_eq!(shared, vec!["z1", "z2", "a1"]);
}

#[test]
fn filters_run_after_all_contributors() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut manager = ContributorManager::new();
    manager.register(Box::new(ModuleFilter("noisy")));
    manager.register(Box::new(FixedContributor::new(
        "noisy",
        "Noise",
        &["n1", "n2"],
        calls.clone(),
    )));
    manager.register(Box::new(FixedContributor::new(
        "quiet",
        "Quiet",
        &["q1"],
        calls,
    )));

    let catalog = CatalogBuilder::new(manager)
        .build(&SiteContext::new(1))
        .unwrap();
    assert_eq!(catalog.category_names(), vec!["Quiet"]);
    assert!(!catalog.is_defined("noisy", "n1"));
}

#[test]
fn settings_restrict_enabled_contributors() {
    let settings = Settings {
        enabled_contributors: Some(HashSet::from(["seo".to_string(), "goals".to_string()])),
        ..Settings::default()
    };
    let manager = settings.contributors();
    assert_eq!(manager.names(), vec!["goals", "seo"]);

    let catalog = CatalogBuilder::new(manager)
        .build(&SiteContext::new(1).with_ecommerce(true))
        .unwrap();
    assert_eq!(
        catalog.category_names(),
        vec!["Goals_Goals", "Goals_Ecommerce", "SEO"]
    );
}

#[test]
fn defaults_register_builtin_contributors_in_display_order() {
    let manager = ContributorManager::with_defaults();
    assert_eq!(
        manager.names(),
        vec![
            "dashboard",
            "visits_summary",
            "live",
            "visitor_interest",
            "visit_time",
            "user_country",
            "devices",
            "actions",
            "referrers",
            "goals",
            "seo",
            "insights",
            "example_widgets",
            "example_ui",
        ]
    );
    assert!(manager.iter().all(|c| !c.description().is_empty()));
}

#[test]
fn sort_hints_restore_visitor_blocks_registered_out_of_order() {
    let mut manager = ContributorManager::new();
    manager.register(Box::new(visitors::DEVICES));
    manager.register(Box::new(visitors::VISIT_TIME));
    manager.register(Box::new(LiveContributor));
    manager.register(Box::new(visitors::VISITS_SUMMARY));
    let catalog = CatalogBuilder::new(manager)
        .build(&SiteContext::new(1))
        .unwrap();

    let inserted = catalog.category(visitors::CATEGORY).unwrap();
    assert_eq!(inserted[0].module(), "DevicesDetection");

    let sorted = catalog.sorted_by_order(visitors::CATEGORY);
    assert_eq!(sorted.len(), inserted.len());
    assert!(sorted.windows(2).all(|pair| pair[0].order() <= pair[1].order()));
    assert_eq!(sorted[0].module(), "VisitsSummary");
    assert_eq!(sorted[6].unique_id(), "widgetLivegetVisitorLog");
    assert_eq!(sorted[6].order(), visitors::VISITOR_LOG_ORDER);
    assert_eq!(sorted[7].module(), "VisitTime");
    assert_eq!(sorted.last().map(|w| w.module()), Some("Provider"));
}

