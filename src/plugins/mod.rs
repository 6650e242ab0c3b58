//! Built-in contributors.
//!
//! Most feature areas offer a fixed list of widgets and are expressed as a
//! [`StaticContributor`] table. Areas whose widgets depend on the site, such
//! as goals and e-commerce, implement [`Contributor`] directly.

use crate::dashboard::widgets::DEFAULT_ORDER;
use crate::dashboard::WidgetDescriptor;
use crate::plugin::{Contributor, WidgetContext};

pub mod actions;
pub mod dashboard;
pub mod demo;
pub mod goals;
pub mod insights;
pub mod live;
pub mod referrers;
pub mod seo;
pub mod visitors;

/// `(name, module, action)` of a widget that exists on every site.
pub type StaticWidget = (&'static str, &'static str, &'static str);

/// Contributor emitting the same widgets into one category for every site.
#[derive(Debug, Clone, Copy)]
pub struct StaticContributor {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    widgets: &'static [StaticWidget],
    order: i32,
}

impl StaticContributor {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        category: &'static str,
        widgets: &'static [StaticWidget],
    ) -> Self {
        Self {
            name,
            description,
            category,
            widgets,
            order: DEFAULT_ORDER,
        }
    }

    /// Sort hint given to every widget of the table. Feature areas sharing a
    /// category use it to keep their block in place in sorted views.
    pub const fn with_order(self, order: i32) -> Self {
        Self { order, ..self }
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }
}

impl Contributor for StaticContributor {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn widgets(&self, ctx: &WidgetContext<'_>) -> anyhow::Result<Vec<WidgetDescriptor>> {
        let widgets = static_widgets(ctx, self.category, self.widgets)?
            .into_iter()
            .map(|w| w.with_order(self.order))
            .collect();
        Ok(widgets)
    }
}

pub(crate) fn static_widgets(
    ctx: &WidgetContext<'_>,
    category: &str,
    table: &[StaticWidget],
) -> Result<Vec<WidgetDescriptor>, crate::error::WidgetError> {
    table
        .iter()
        .map(|&(name, module, action)| ctx.widget(category, name, module, action))
        .collect()
}

/// Built-in contributors in display order.
pub fn builtin_contributors() -> Vec<Box<dyn Contributor>> {
    vec![
        Box::new(dashboard::DASHBOARD),
        Box::new(visitors::VISITS_SUMMARY),
        Box::new(live::LiveContributor),
        Box::new(visitors::VISITOR_INTEREST),
        Box::new(visitors::VISIT_TIME),
        Box::new(visitors::USER_COUNTRY),
        Box::new(visitors::DEVICES),
        Box::new(actions::ACTIONS),
        Box::new(referrers::REFERRERS),
        Box::new(goals::GoalsContributor),
        Box::new(seo::SEO),
        Box::new(insights::INSIGHTS),
        Box::new(demo::EXAMPLE_WIDGETS),
        Box::new(demo::EXAMPLE_UI),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteContext;
    use crate::translate::NoTranslation;
    use std::collections::HashSet;

    #[test]
    fn builtin_names_are_unique() {
        let contributors = builtin_contributors();
        let names: HashSet<&str> = contributors.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), contributors.len());
    }

    #[test]
    fn static_contributor_emits_its_table() {
        let site = SiteContext::new(1);
        let ctx = WidgetContext::new(&site, &NoTranslation);
        let widgets = seo::SEO.widgets(&ctx).unwrap();
        assert_eq!(widgets.len(), seo::SEO.widget_count());
        assert!(widgets.iter().all(|w| w.category() == seo::SEO.category()));
    }

    #[test]
    fn visitor_areas_fill_the_visitors_category() {
        let site = SiteContext::new(1);
        let ctx = WidgetContext::new(&site, &NoTranslation);
        let contributors = builtin_contributors();
        let counts: Vec<(&str, usize)> = contributors
            .iter()
            .map(|c| {
                let widgets = c.widgets(&ctx).unwrap();
                let in_category = widgets
                    .iter()
                    .filter(|w| w.category() == visitors::CATEGORY)
                    .count();
                (c.name(), in_category)
            })
            .filter(|&(_, n)| n > 0)
            .collect();
        assert_eq!(
            counts,
            vec![
                ("visits_summary", 6),
                ("live", 1),
                ("visitor_interest", 5),
                ("visit_time", 3),
                ("user_country", 5),
                ("devices", 14),
            ]
        );
        assert_eq!(counts.iter().map(|&(_, n)| n).sum::<usize>(), 34);
        assert_eq!(visitors::VISIT_TIME.order(), visitors::VISIT_TIME_ORDER);
    }

    #[test]
    fn static_tables_have_distinct_targets() {
        let site = SiteContext::new(1);
        let ctx = WidgetContext::new(&site, &NoTranslation);
        let mut seen = HashSet::new();
        for contributor in builtin_contributors() {
            for widget in contributor.widgets(&ctx).unwrap() {
                assert!(
                    seen.insert(widget.unique_id().to_string()),
                    "duplicate widget {} from {}",
                    widget.unique_id(),
                    contributor.name()
                );
            }
        }
    }
}
