use super::{static_widgets, StaticWidget};
use crate::dashboard::WidgetDescriptor;
use crate::plugin::{Contributor, WidgetContext};
use crate::site::Goal;

pub const GOALS_CATEGORY: &str = "Goals_Goals";
pub const ECOMMERCE_CATEGORY: &str = "Goals_Ecommerce";

/// Value of `idGoal` addressing e-commerce orders instead of a goal.
pub const ECOMMERCE_ORDER: &str = "ecommerceOrder";

const OVERVIEW: &[StaticWidget] = &[
    ("Goals_GoalsOverview", "Goals", "widgetGoalsOverview"),
    ("General_EvolutionOverPeriod", "Goals", "getEvolutionGraph"),
    ("Goals_Sparklines", "Goals", "getSparklines"),
    ("Goals_VisitsUntilConv", "Goals", "getVisitsUntilConversion"),
    ("Goals_DaysToConv", "Goals", "getDaysToConversion"),
];

/// Emitted once per configured goal, parameterized with its id.
const PER_GOAL: &[StaticWidget] = &[
    ("Goals_GoalReport", "Goals", "widgetGoalReport"),
    ("General_EvolutionOverPeriod", "Goals", "getEvolutionGraph"),
    ("Goals_Sparklines", "Goals", "getSparklines"),
    ("Goals_VisitsUntilConv", "Goals", "getVisitsUntilConversion"),
    ("Goals_DaysToConv", "Goals", "getDaysToConversion"),
];

/// `(name, module, action, scoped to e-commerce orders)`.
const ECOMMERCE: &[(&str, &str, &str, bool)] = &[
    ("General_Overview", "Ecommerce", "widgetGoalReport", true),
    ("General_EvolutionOverPeriod", "Ecommerce", "getEvolutionGraph", true),
    ("Goals_EcommerceLog", "Ecommerce", "getEcommerceLog", false),
    ("Goals_ProductSKU", "Goals", "getItemsSku", false),
    ("Goals_ProductName", "Goals", "getItemsName", false),
    ("Goals_ProductCategory", "Goals", "getItemsCategory", false),
];

/// Goal and e-commerce widgets.
///
/// The goals category always holds the overview widgets and grows by one
/// set per configured goal. Sites with e-commerce enabled get an extra
/// e-commerce category.
pub struct GoalsContributor;

impl GoalsContributor {
    fn goal_widgets(
        &self,
        ctx: &WidgetContext<'_>,
        goal: &Goal,
    ) -> anyhow::Result<Vec<WidgetDescriptor>> {
        let mut widgets = Vec::with_capacity(PER_GOAL.len());
        for &(name, module, action) in PER_GOAL {
            let label = format!("{} - {}", goal.name, ctx.translate(name));
            let widget = ctx
                .widget(GOALS_CATEGORY, name, module, action)?
                .with_parameter("idGoal", goal.id)?
                .with_display_name(label);
            widgets.push(widget);
        }
        Ok(widgets)
    }

    fn ecommerce_widgets(&self, ctx: &WidgetContext<'_>) -> anyhow::Result<Vec<WidgetDescriptor>> {
        let mut widgets = Vec::with_capacity(ECOMMERCE.len());
        for &(name, module, action, orders) in ECOMMERCE {
            let mut widget = ctx.widget(ECOMMERCE_CATEGORY, name, module, action)?;
            if orders {
                widget = widget.with_parameter("idGoal", ECOMMERCE_ORDER)?;
            }
            widgets.push(widget);
        }
        Ok(widgets)
    }
}

impl Contributor for GoalsContributor {
    fn name(&self) -> &str {
        "goals"
    }

    fn description(&self) -> &str {
        "Goal conversions per goal and e-commerce reports"
    }

    fn widgets(&self, ctx: &WidgetContext<'_>) -> anyhow::Result<Vec<WidgetDescriptor>> {
        let mut widgets = static_widgets(ctx, GOALS_CATEGORY, OVERVIEW)?;
        for goal in ctx.site.goals() {
            widgets.extend(self.goal_widgets(ctx, goal)?);
        }
        if ctx.site.is_ecommerce_enabled() {
            widgets.extend(self.ecommerce_widgets(ctx)?);
        }
        Ok(widgets)
    }
}
