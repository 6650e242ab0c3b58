use super::StaticContributor;

pub const REFERRERS: StaticContributor = StaticContributor::new(
    "referrers",
    "Acquisition channels, search engines, websites and campaigns",
    "Referrers_Referrers",
    &[
        ("Referrers_WidgetGetAll", "Referrers", "getAll"),
        ("Referrers_Type", "Referrers", "getReferrerType"),
        ("General_EvolutionOverPeriod", "Referrers", "getEvolutionGraph"),
        ("Referrers_ReferrersOverview", "Referrers", "getSparklines"),
        ("Referrers_WidgetKeywords", "Referrers", "getKeywords"),
        ("Referrers_WidgetSearchEngines", "Referrers", "getSearchEngines"),
        ("Referrers_WidgetExternalWebsites", "Referrers", "getWebsites"),
        ("Referrers_WidgetSocials", "Referrers", "getSocials"),
        ("Referrers_Campaigns", "Referrers", "getCampaigns"),
    ],
);
