//! FILENAME: core/group-cell/src/content.rs
//! Content strategy - what goes into the value slot.
//!
//! Exactly one mode is chosen per render, first match wins:
//! custom renderer, footer, group, leaf.

use row_tree::{ColumnModel, RowNode};

use crate::params::{FooterValueGetter, RenderParams};
use crate::services::{CellComponent, CellServices};
use crate::view::CellContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMode {
    /// Delegate to the named inner renderer.
    CustomRenderer(String),
    Footer,
    Group,
    Leaf,
}

impl ContentMode {
    pub fn select(params: &RenderParams, node: &RowNode) -> Self {
        if let Some(renderer) = &params.inner_renderer {
            ContentMode::CustomRenderer(renderer.clone())
        } else if node.footer {
            ContentMode::Footer
        } else if node.group {
            ContentMode::Group
        } else {
            ContentMode::Leaf
        }
    }

    /// Group rows carry the child count label.
    pub fn shows_child_count(&self) -> bool {
        matches!(self, ContentMode::Group)
    }
}

/// Result of filling the value slot. A created component is owned by the
/// cell from here on and must be destroyed with it.
pub struct ContentOutcome {
    pub mode: ContentMode,
    pub content: CellContent,
    pub component: Option<Box<dyn CellComponent>>,
}

impl ContentOutcome {
    fn plain(mode: ContentMode, content: CellContent) -> Self {
        ContentOutcome {
            mode,
            content,
            component: None,
        }
    }
}

pub fn produce_content(
    node: &RowNode,
    columns: &ColumnModel,
    services: &CellServices,
    params: &RenderParams,
) -> ContentOutcome {
    let mode = ContentMode::select(params, node);
    match &mode {
        ContentMode::CustomRenderer(renderer) => {
            let (content, component) = delegate(services, renderer, params);
            ContentOutcome { mode, content, component }
        }
        ContentMode::Footer => {
            let content = match footer_text(services, params) {
                Some(text) => CellContent::Markup(text),
                None => CellContent::Empty,
            };
            ContentOutcome::plain(mode, content)
        }
        ContentMode::Group => group_content(node, columns, services, params),
        ContentMode::Leaf => {
            let content = match non_empty(&params.actual_value) {
                Some(value) => CellContent::Markup(value.to_string()),
                None => CellContent::Empty,
            };
            ContentOutcome::plain(mode, content)
        }
    }
}

// ============================================================================
// FOOTER
// ============================================================================

/// Footer text. `None` when a configured getter could not produce a value.
pub fn footer_text(services: &CellServices, params: &RenderParams) -> Option<String> {
    let group_name = params.value.clone().unwrap_or_default();

    let Some(getter) = &params.footer_value_getter else {
        return Some(format!("Total {}", group_name));
    };

    let mut footer_params = params.clone();
    footer_params.value = Some(group_name);

    match getter {
        FooterValueGetter::Function(f) => Some(f(&footer_params)),
        FooterValueGetter::Expression(expression) => {
            match services.expressions.evaluate(expression, &footer_params) {
                Ok(text) => Some(text),
                Err(e) => {
                    log::warn!("GROUPCELL|footer value expression '{}' failed: {}", expression, e);
                    None
                }
            }
        }
    }
}

// ============================================================================
// GROUP
// ============================================================================

fn group_content(
    node: &RowNode,
    columns: &ColumnModel,
    services: &CellServices,
    params: &RenderParams,
) -> ContentOutcome {
    // Data that arrives already grouped has no row-group column at this
    // level; the rendered column stands in.
    let grouped_column = node
        .row_group_index
        .and_then(|index| columns.row_group_column(index))
        .or_else(|| columns.column(&params.column));

    let renderer = grouped_column.and_then(|c| c.cell_renderer().map(|r| (c, r)));
    if let Some((column, renderer)) = renderer {
        // The caller's renderer configuration belongs to this column, not the
        // grouped one, so the grouped column's own configuration goes in.
        // Value fields stay this cell's own.
        let mut delegate_params = params.clone();
        if let Some(config) = column.cell_renderer_params() {
            delegate_params
                .renderer_params
                .extend(config.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        let (content, component) = delegate(services, renderer, &delegate_params);
        return ContentOutcome {
            mode: ContentMode::Group,
            content,
            component,
        };
    }

    let content = match non_empty(&params.actual_value) {
        Some(value) => CellContent::Text(value.to_string()),
        None => CellContent::Empty,
    };
    ContentOutcome::plain(ContentMode::Group, content)
}

fn delegate(
    services: &CellServices,
    renderer: &str,
    params: &RenderParams,
) -> (CellContent, Option<Box<dyn CellComponent>>) {
    match services.renderers.create(renderer, params) {
        Ok(component) => {
            let content = CellContent::Component {
                renderer: renderer.to_string(),
                markup: component.gui(),
            };
            (content, Some(component))
        }
        Err(e) => {
            log::warn!("GROUPCELL|cell renderer '{}' unavailable: {}", renderer, e);
            (CellContent::Empty, None)
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
