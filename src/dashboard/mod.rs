pub mod builder;
pub mod cache;
pub mod catalog;
pub mod widgets;

pub use builder::CatalogBuilder;
pub use cache::CatalogCache;
pub use catalog::{Catalog, SharedCatalog};
pub use widgets::{widget_unique_id, WidgetDescriptor, WidgetTarget};
