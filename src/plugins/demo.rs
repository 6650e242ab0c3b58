//! Demonstration widgets shipped for plugin authors.

use super::StaticContributor;

pub const EXAMPLE_WIDGETS: StaticContributor = StaticContributor::new(
    "example_widgets",
    "Sample widgets showing how a feature area contributes",
    "Example Widgets",
    &[
        ("Simple widget", "ExamplePlugin", "myExampleWidget"),
        ("Piwik.org Blog", "ExampleRssWidget", "rssPiwik"),
        ("Piwik Changelog", "ExampleRssWidget", "rssChangelog"),
        ("Photo of the day", "ExampleWidgets", "photo"),
        ("Top concerts", "ExampleWidgets", "topConcerts"),
    ],
);

pub const EXAMPLE_UI: StaticContributor = StaticContributor::new(
    "example_ui",
    "One widget per visualization of the UI framework",
    "ExampleUI_UiFramework",
    &[
        ("ExampleUI_DataTables", "ExampleUI", "dataTables"),
        ("ExampleUI_EvolutionGraph", "ExampleUI", "evolutionGraph"),
        ("ExampleUI_BarGraph", "ExampleUI", "barGraph"),
        ("ExampleUI_PieGraph", "ExampleUI", "pieGraph"),
        ("ExampleUI_TagClouds", "ExampleUI", "tagClouds"),
        ("ExampleUI_Sparklines", "ExampleUI", "sparklines"),
        ("ExampleUI_Treemap", "ExampleUI", "treemap"),
        ("ExampleUI_Notifications", "ExampleUI", "notifications"),
    ],
);
