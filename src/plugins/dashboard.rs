use super::StaticContributor;

pub const DASHBOARD: StaticContributor = StaticContributor::new(
    "dashboard",
    "Embeds a whole dashboard as a widget",
    "Dashboard_Dashboard",
    &[("Dashboard_Dashboard", "Dashboard", "embeddedIndex")],
);
