use crate::dashboard::widgets::WidgetDescriptor;
use hashlink::LinkedHashMap;
use serde::ser::{Serialize, Serializer};
use std::sync::{Arc, Mutex};

/// Catalog handle shared by everyone consuming the same build.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

/// Categorized, ordered registry of widget descriptors.
///
/// Categories keep the order in which their first widget was added and
/// widgets keep insertion order inside their category. A category is only
/// present while it holds at least one widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: LinkedHashMap<String, Vec<WidgetDescriptor>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a widget to its category. Duplicates are accepted; use
    /// [`Catalog::is_defined`] to check before adding when that matters.
    pub fn add_widget(&mut self, widget: WidgetDescriptor) {
        if let Some(widgets) = self.categories.get_mut(widget.category()) {
            widgets.push(widget);
        } else {
            self.categories
                .insert(widget.category().to_string(), vec![widget]);
        }
    }

    pub fn add_widgets(&mut self, widgets: impl IntoIterator<Item = WidgetDescriptor>) {
        for widget in widgets {
            self.add_widget(widget);
        }
    }

    /// All widgets in category order, then insertion order.
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetDescriptor> + '_ {
        self.categories.values().flat_map(|widgets| widgets.iter())
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[WidgetDescriptor])> + '_ {
        self.categories
            .iter()
            .map(|(category, widgets)| (category.as_str(), widgets.as_slice()))
    }

    pub fn category(&self, category: &str) -> Option<&[WidgetDescriptor]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// `(category, widget count)` pairs in display order.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|(category, widgets)| (category.clone(), widgets.len()))
            .collect()
    }

    /// Widgets of one category ordered by their sort hint. Widgets sharing a
    /// hint keep insertion order.
    pub fn sorted_by_order(&self, category: &str) -> Vec<&WidgetDescriptor> {
        let mut widgets: Vec<&WidgetDescriptor> = self
            .categories
            .get(category)
            .map(|widgets| widgets.iter().collect())
            .unwrap_or_default();
        widgets.sort_by_key(|w| w.order());
        widgets
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_len(&self) -> usize {
        self.categories.len()
    }

    /// Whether any widget in any category renders `module`/`action`.
    /// Comparison is case-sensitive.
    pub fn is_defined(&self, module: &str, action: &str) -> bool {
        self.widgets().any(|w| w.target().matches(module, action))
    }

    pub fn find(&self, unique_id: &str) -> Option<&WidgetDescriptor> {
        self.widgets().find(|w| w.unique_id() == unique_id)
    }

    /// Remove a category and every widget in it. Unknown categories are ignored.
    pub fn remove_category(&mut self, category: &str) -> usize {
        self.categories
            .remove(category)
            .map(|widgets| widgets.len())
            .unwrap_or(0)
    }

    /// Remove the widgets of `category` whose name or unique id equals `id`
    /// and return how many were dropped. The category disappears with its
    /// last widget; unknown categories or ids are ignored.
    pub fn remove(&mut self, category: &str, id: &str) -> usize {
        let Some(widgets) = self.categories.get_mut(category) else {
            return 0;
        };
        let before = widgets.len();
        widgets.retain(|w| !w.is_identified_by(id));
        let removed = before - widgets.len();
        if widgets.is_empty() {
            self.categories.remove(category);
        }
        if removed > 0 {
            tracing::debug!(category, id, removed, "removed widgets from catalog");
        }
        removed
    }

    /// Keep only the widgets matching `keep`, pruning emptied categories.
    pub fn retain(&mut self, mut keep: impl FnMut(&WidgetDescriptor) -> bool) -> usize {
        let mut removed = 0;
        let mut emptied = Vec::new();
        for (category, widgets) in self.categories.iter_mut() {
            let before = widgets.len();
            widgets.retain(|w| keep(w));
            removed += before - widgets.len();
            if widgets.is_empty() {
                emptied.push(category.clone());
            }
        }
        for category in emptied {
            self.categories.remove(&category);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(Mutex::new(self))
    }
}

impl Extend<WidgetDescriptor> for Catalog {
    fn extend<T: IntoIterator<Item = WidgetDescriptor>>(&mut self, iter: T) {
        self.add_widgets(iter);
    }
}

impl FromIterator<WidgetDescriptor> for Catalog {
    fn from_iter<T: IntoIterator<Item = WidgetDescriptor>>(iter: T) -> Self {
        let mut catalog = Self::new();
        catalog.add_widgets(iter);
        catalog
    }
}

#[derive(serde::Serialize)]
struct CategoryView<'a> {
    category: &'a str,
    display_category: &'a str,
    widgets: &'a [WidgetDescriptor],
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.categories.iter().map(|(category, widgets)| CategoryView {
            category: category.as_str(),
            display_category: widgets
                .first()
                .map(WidgetDescriptor::display_category)
                .unwrap_or(category.as_str()),
            widgets: widgets.as_slice(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(category: &str, name: &str, module: &str, action: &str) -> WidgetDescriptor {
        WidgetDescriptor::new(category, name, module, action).unwrap()
    }

    fn sample() -> Catalog {
        [
            widget("SEO", "SEO_SeoRankings", "SEO", "getRank"),
            widget("Live!", "Live_VisitorsInRealTime", "Live", "widget"),
            widget("SEO", "Referrers_WidgetTopKeywordsForPages", "Referrers", "getKeywordsForPageUrl"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn categories_keep_first_insertion_order() {
        let catalog = sample();
        assert_eq!(catalog.category_names(), vec!["SEO", "Live!"]);
        assert_eq!(
            catalog.category_counts(),
            vec![("SEO".to_string(), 2), ("Live!".to_string(), 1)]
        );
        let names: Vec<&str> = catalog.widgets().map(|w| w.name()).collect();
        assert_eq!(
            names,
            vec![
                "SEO_SeoRankings",
                "Referrers_WidgetTopKeywordsForPages",
                "Live_VisitorsInRealTime"
            ]
        );
    }

    #[test]
    fn duplicates_are_not_rejected() {
        let mut catalog = sample();
        catalog.add_widget(widget("SEO", "SEO_SeoRankings", "SEO", "getRank"));
        assert_eq!(catalog.category("SEO").map(<[_]>::len), Some(3));
        assert_eq!(catalog.remove("SEO", "SEO_SeoRankings"), 2);
        assert_eq!(catalog.category("SEO").map(<[_]>::len), Some(1));
    }

    #[test]
    fn removing_unknown_ids_is_a_no_op() {
        let mut catalog = sample();
        assert_eq!(catalog.remove("SEO", "NoTeXiStInG"), 0);
        assert_eq!(catalog.remove("Nope", "SEO_SeoRankings"), 0);
        assert_eq!(catalog.remove_category("Nope"), 0);
        assert_eq!(catalog, sample());
    }

    #[test]
    fn removing_last_widget_prunes_category() {
        let mut catalog = sample();
        assert_eq!(catalog.remove("Live!", "widgetLivewidget"), 1);
        assert!(!catalog.contains_category("Live!"));
        assert_eq!(catalog.category_len(), 1);
    }

    #[test]
    fn is_defined_is_case_sensitive() {
        let catalog = sample();
        assert!(catalog.is_defined("SEO", "getRank"));
        assert!(!catalog.is_defined("seo", "getRank"));
        assert!(!catalog.is_defined("SEO", "getrank"));
    }

    #[test]
    fn retain_prunes_emptied_categories() {
        let mut catalog = sample();
        let removed = catalog.retain(|w| w.module() != "Live");
        assert_eq!(removed, 1);
        assert_eq!(catalog.category_names(), vec!["SEO"]);
    }

    #[test]
    fn sorted_view_uses_order_hint() {
        let mut catalog = Catalog::new();
        catalog.add_widget(widget("Visitors", "b", "M", "b"));
        catalog.add_widget(widget("Visitors", "a", "M", "a").with_order(1));
        let sorted: Vec<&str> = catalog.sorted_by_order("Visitors").iter().map(|w| w.name()).collect();
        assert_eq!(sorted, vec!["a", "b"]);
        let inserted: Vec<&str> = catalog.widgets().map(|w| w.name()).collect();
        assert_eq!(inserted, vec!["b", "a"]);
    }

    #[test]
    fn serializes_as_ordered_categories() {
        let json = serde_json::to_value(sample()).unwrap();
        let categories = json.as_array().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0]["category"], "SEO");
        assert_eq!(categories[0]["widgets"][0]["unique_id"], "widgetSEOgetRank");
        assert_eq!(categories[1]["widgets"][0]["target"]["module"], "Live");
    }

    #[test]
    fn shared_handles_observe_mutation() {
        let shared = sample().into_shared();
        let other = Arc::clone(&shared);
        shared.lock().unwrap().remove_category("SEO");
        assert!(!other.lock().unwrap().contains_category("SEO"));
    }
}
