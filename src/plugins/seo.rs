use super::StaticContributor;

pub const SEO: StaticContributor = StaticContributor::new(
    "seo",
    "Search engine rankings and top keywords per page",
    "SEO",
    &[
        ("SEO_SeoRankings", "SEO", "getRank"),
        ("Referrers_WidgetTopKeywordsForPages", "Referrers", "getKeywordsForPageUrl"),
    ],
);
