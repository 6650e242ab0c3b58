use clap::Parser;
use std::path::PathBuf;
use widget_catalog::dashboard::{Catalog, CatalogBuilder, CatalogCache};
use widget_catalog::logging;
use widget_catalog::settings::Settings;
use widget_catalog::site::{InMemorySites, SiteContext};

/// Print the widget catalog of one or more sites.
#[derive(Parser)]
#[command(name = "widget-catalog", version)]
struct Cli {
    /// JSON file describing the sites, their goals and e-commerce flag.
    sites: PathBuf,
    #[arg(required = true)]
    site_ids: Vec<u32>,
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Locale used for labels. Defaults to the settings' locale.
    #[arg(long)]
    locale: Option<String>,
    /// Print the full catalog as JSON instead of per-category counts.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    logging::init(settings.debug_logging, settings.log_file.clone());

    let sites = InMemorySites::load(&cli.sites)?;
    let locale = cli
        .locale
        .clone()
        .unwrap_or_else(|| settings.default_locale.clone());
    let builder = CatalogBuilder::from_settings(&settings)?;
    let cache = CatalogCache::new(settings.cache_capacity);

    for &site_id in &cli.site_ids {
        let site = SiteContext::resolve(&sites, site_id, &locale)?;
        let catalog = cache.get_or_build(&builder, &site)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        } else {
            print_summary(site_id, &catalog);
        }
    }
    Ok(())
}

fn print_summary(site_id: u32, catalog: &Catalog) {
    println!("site {site_id}");
    for (category, widgets) in catalog.categories() {
        let label = widgets
            .first()
            .map(|w| w.display_category())
            .unwrap_or(category);
        println!("{:>4}  {label}", widgets.len());
    }
    println!(
        "{} widgets in {} categories",
        catalog.len(),
        catalog.category_len()
    );
}
