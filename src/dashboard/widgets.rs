use crate::error::WidgetError;
use crate::translate::Translator;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Sort hint given to widgets that do not ask for a position.
pub const DEFAULT_ORDER: i32 = 99;

/// Module/action pair a widget renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WidgetTarget {
    pub module: String,
    pub action: String,
}

impl WidgetTarget {
    pub fn matches(&self, module: &str, action: &str) -> bool {
        self.module == module && self.action == action
    }
}

/// Descriptor of a single dashboard widget.
///
/// Descriptors are validated when built and cannot be mutated in place; the
/// `with_*` methods consume the descriptor and return an updated copy. Once a
/// descriptor sits in a [`Catalog`](crate::dashboard::Catalog) it is only
/// reachable through shared references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetDescriptor {
    category: String,
    name: String,
    display_category: String,
    display_name: String,
    target: WidgetTarget,
    parameters: BTreeMap<String, Value>,
    order: i32,
    unique_id: String,
}

impl WidgetDescriptor {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        module: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<Self, WidgetError> {
        let category = category.into();
        let name = name.into();
        let module = module.into();
        let action = action.into();
        if category.trim().is_empty() {
            return Err(WidgetError::EmptyCategory);
        }
        if name.trim().is_empty() {
            return Err(WidgetError::EmptyName { category });
        }
        if module.trim().is_empty() {
            return Err(WidgetError::EmptyModule { name });
        }
        if action.trim().is_empty() {
            return Err(WidgetError::EmptyAction { name });
        }
        let parameters = BTreeMap::new();
        let unique_id = widget_unique_id(&module, &action, &parameters);
        Ok(Self {
            display_category: category.clone(),
            display_name: name.clone(),
            category,
            name,
            target: WidgetTarget { module, action },
            parameters,
            order: DEFAULT_ORDER,
            unique_id,
        })
    }

    /// Attach a parameter forwarded to the render target. Only strings,
    /// numbers and booleans are accepted.
    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, WidgetError> {
        let key = key.into();
        let value = value.into();
        if !is_scalar(&value) {
            return Err(WidgetError::NonScalarParameter {
                name: self.name,
                key,
            });
        }
        self.parameters.insert(key, value);
        self.unique_id = widget_unique_id(&self.target.module, &self.target.action, &self.parameters);
        Ok(self)
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Override the translated label, e.g. for labels built from site data.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Resolve display labels for `locale`.
    pub fn localized(mut self, translator: &dyn Translator, locale: &str) -> Self {
        self.display_category = translator.translate(&self.category, locale);
        self.display_name = translator.translate(&self.name, locale);
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_category(&self) -> &str {
        &self.display_category
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn target(&self) -> &WidgetTarget {
        &self.target
    }

    pub fn module(&self) -> &str {
        &self.target.module
    }

    pub fn action(&self) -> &str {
        &self.target.action
    }

    pub fn parameters(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Whether `id` names this widget, either by name key or unique id.
    pub fn is_identified_by(&self, id: &str) -> bool {
        self.name == id || self.unique_id == id
    }
}

/// Build the identifier of a widget from its render target and parameters:
/// `"widget" + module + action` followed by every `name + value` pair in key
/// order.
pub fn widget_unique_id(module: &str, action: &str, parameters: &BTreeMap<String, Value>) -> String {
    let mut id = format!("widget{module}{action}");
    for (key, value) in parameters {
        id.push_str(key);
        match value {
            Value::String(s) => id.push_str(s),
            Value::Bool(true) => id.push('1'),
            Value::Bool(false) => id.push('0'),
            other => id.push_str(&other.to_string()),
        }
    }
    id
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}
