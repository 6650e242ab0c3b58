//! Dashboard widget catalog.
//!
//! Widgets are contributed per feature area, assembled into a categorized
//! [`Catalog`](dashboard::Catalog) for one site by a
//! [`CatalogBuilder`](dashboard::CatalogBuilder), and memoized per site
//! context by a [`CatalogCache`](dashboard::CatalogCache).
//!
//! ```no_run
//! use widget_catalog::dashboard::CatalogBuilder;
//! use widget_catalog::site::{Goal, SiteContext};
//!
//! let site = SiteContext::new(1).with_goal(Goal { id: 1, name: "Signup".into() });
//! let mut catalog = CatalogBuilder::with_defaults().build(&site)?;
//! catalog.remove("SEO", "SEO_SeoRankings");
//! assert!(catalog.is_defined("Goals", "widgetGoalReport"));
//! # Ok::<(), widget_catalog::error::CatalogBuildError>(())
//! ```

pub mod common;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod plugins;
pub mod settings;
pub mod site;
pub mod translate;
