//! FILENAME: core/group-cell/src/params.rs
//! Render parameters - the value bag one group cell is rendered from.
//!
//! A `RenderParams` is owned by one cell. Cloning it is a shallow copy:
//! closures are shared, everything else is copied. The renderer never
//! mutates the bag a caller handed in; node promotion and cross-column
//! delegation work on derived copies.

use std::fmt;
use std::rc::Rc;

use row_tree::{ColumnId, NodeId, Pinned};
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

// ============================================================================
// OVERRIDES
// ============================================================================

/// How a footer row computes its display text.
#[derive(Clone)]
pub enum FooterValueGetter {
    /// Called with the params, `value` set to the group name.
    Function(Rc<dyn Fn(&RenderParams) -> String>),
    /// Evaluated by the expression evaluator against the same params.
    Expression(String),
}

impl FooterValueGetter {
    pub fn function(f: impl Fn(&RenderParams) -> String + 'static) -> Self {
        FooterValueGetter::Function(Rc::new(f))
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        FooterValueGetter::Expression(expression.into())
    }

    /// Reads a getter from column configuration. Only strings (expressions)
    /// can be configured this way; anything else is ignored with a warning.
    pub fn from_config(value: &Value) -> Option<Self> {
        match value {
            Value::String(expression) => Some(FooterValueGetter::Expression(expression.clone())),
            Value::Null => None,
            other => {
                log::warn!(
                    "GROUPCELL|footerValueGetter must be a function or expression string, got {}",
                    other
                );
                None
            }
        }
    }
}

impl fmt::Debug for FooterValueGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FooterValueGetter::Function(_) => f.write_str("Function(..)"),
            FooterValueGetter::Expression(e) => f.debug_tuple("Expression").field(e).finish(),
        }
    }
}

/// Whether the cell asks for a selection checkbox.
#[derive(Clone, Default)]
pub enum CheckboxSpec {
    #[default]
    Disabled,
    Enabled,
    /// Decided per cell from the effective params.
    Predicate(Rc<dyn Fn(&RenderParams) -> bool>),
}

impl CheckboxSpec {
    pub fn predicate(f: impl Fn(&RenderParams) -> bool + 'static) -> Self {
        CheckboxSpec::Predicate(Rc::new(f))
    }

    pub fn wants_checkbox(&self, params: &RenderParams) -> bool {
        match self {
            CheckboxSpec::Disabled => false,
            CheckboxSpec::Enabled => true,
            CheckboxSpec::Predicate(f) => f(params),
        }
    }
}

impl From<bool> for CheckboxSpec {
    fn from(enabled: bool) -> Self {
        if enabled {
            CheckboxSpec::Enabled
        } else {
            CheckboxSpec::Disabled
        }
    }
}

impl fmt::Debug for CheckboxSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckboxSpec::Disabled => f.write_str("Disabled"),
            CheckboxSpec::Enabled => f.write_str("Enabled"),
            CheckboxSpec::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ============================================================================
// PARAMS
// ============================================================================

#[derive(Debug, Clone)]
pub struct RenderParams {
    /// The row node driving the cell.
    pub node: NodeId,

    /// The column being rendered.
    pub column: ColumnId,

    /// Set by auto-group columns: the row-group column this cell stands for.
    pub original_row_group_column: Option<ColumnId>,

    /// Section the cell is rendered in. `None` is the body.
    pub pinned: Option<Pinned>,

    pub value: Option<String>,
    pub value_formatted: Option<String>,

    /// The value to display, after key mapping.
    pub actual_value: Option<String>,

    /// Only render when the column matches the row's own grouping level.
    pub restrict_to_one_group: bool,

    pub suppress_padding: bool,
    pub suppress_count: bool,

    /// Indent per level in pixels. Negative or absent uses the default.
    pub padding: Option<i32>,

    pub checkbox: CheckboxSpec,

    /// Name of a registered renderer that replaces the default content.
    pub inner_renderer: Option<String>,

    pub footer_value_getter: Option<FooterValueGetter>,

    /// Display names for group keys.
    pub key_map: FxHashMap<String, String>,

    /// Extra renderer configuration, filled when delegating to another
    /// column's renderer.
    pub renderer_params: Map<String, Value>,
}

impl RenderParams {
    pub fn new(node: NodeId, column: ColumnId) -> Self {
        RenderParams {
            node,
            column,
            original_row_group_column: None,
            pinned: None,
            value: None,
            value_formatted: None,
            actual_value: None,
            restrict_to_one_group: false,
            suppress_padding: false,
            suppress_count: false,
            padding: None,
            checkbox: CheckboxSpec::Disabled,
            inner_renderer: None,
            footer_value_getter: None,
            key_map: FxHashMap::default(),
            renderer_params: Map::new(),
        }
    }

    /// The grouping column this cell is rendered for. An explicit
    /// `original_row_group_column` wins over the rendered column.
    pub fn target_group_column(&self) -> &ColumnId {
        self.original_row_group_column.as_ref().unwrap_or(&self.column)
    }

    /// Copy of these params driven by another node.
    pub fn with_node(&self, node: NodeId) -> Self {
        RenderParams {
            node,
            ..self.clone()
        }
    }

    pub fn with_actual_value(mut self, value: impl Into<String>) -> Self {
        self.actual_value = Some(value.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_pinned(mut self, pinned: Pinned) -> Self {
        self.pinned = Some(pinned);
        self
    }

    pub fn with_original_row_group_column(mut self, column: ColumnId) -> Self {
        self.original_row_group_column = Some(column);
        self
    }

    /// Applies a column's renderer configuration object (camelCase keys, as
    /// in `ColumnDef::cell_renderer_params`). Known keys set the matching
    /// fields; the whole object is kept in `renderer_params`.
    pub fn with_renderer_config(mut self, config: &Map<String, Value>) -> Self {
        let flag = |key: &str| config.get(key).and_then(Value::as_bool);

        if let Some(v) = flag("restrictToOneGroup") {
            self.restrict_to_one_group = v;
        }
        if let Some(v) = flag("suppressPadding") {
            self.suppress_padding = v;
        }
        if let Some(v) = flag("suppressCount") {
            self.suppress_count = v;
        }
        if let Some(v) = flag("checkbox") {
            self.checkbox = CheckboxSpec::from(v);
        }
        if let Some(padding) = config.get("padding").and_then(Value::as_i64) {
            self.padding = i32::try_from(padding).ok();
        }
        if let Some(renderer) = config.get("innerRenderer").and_then(Value::as_str) {
            self.inner_renderer = Some(renderer.to_string());
        }
        if let Some(getter) = config.get("footerValueGetter") {
            self.footer_value_getter = FooterValueGetter::from_config(getter);
        }

        self.renderer_params
            .extend(config.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}
