use super::{static_widgets, visitors, StaticWidget};
use crate::dashboard::WidgetDescriptor;
use crate::plugin::{Contributor, WidgetContext};

pub const CATEGORY: &str = "Live!";

const REAL_TIME: &[StaticWidget] = &[
    ("Live_VisitorsInRealTime", "Live", "widget"),
    ("Live_RealTimeVisitorCount", "Live", "getSimpleLastVisitCount"),
];

const VISITOR_LOG: &[StaticWidget] = &[("Live_VisitorLog", "Live", "getVisitorLog")];

/// Real-time widgets, plus the visitor log listed with the other visitor
/// reports.
pub struct LiveContributor;

impl Contributor for LiveContributor {
    fn name(&self) -> &str {
        "live"
    }

    fn description(&self) -> &str {
        "Real-time visits and the visitor log"
    }

    fn widgets(&self, ctx: &WidgetContext<'_>) -> anyhow::Result<Vec<WidgetDescriptor>> {
        let mut widgets: Vec<WidgetDescriptor> =
            static_widgets(ctx, visitors::CATEGORY, VISITOR_LOG)?
                .into_iter()
                .map(|w| w.with_order(visitors::VISITOR_LOG_ORDER))
                .collect();
        widgets.extend(static_widgets(ctx, CATEGORY, REAL_TIME)?);
        Ok(widgets)
    }
}
