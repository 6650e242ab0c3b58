use super::StaticContributor;

pub const INSIGHTS: StaticContributor = StaticContributor::new(
    "insights",
    "Movers and shakers across reports",
    "Insights_WidgetCategory",
    &[
        ("Insights_OverviewWidgetTitle", "Insights", "getInsightsOverview"),
        ("Insights_MoversAndShakersWidgetTitle", "Insights", "getOverallMoversAndShakers"),
    ],
);
