//! FILENAME: core/group-cell/src/services.rs
//! Collaborators a group cell is constructed with.
//!
//! Everything here is injected through `CellServices` when the renderer is
//! created; there is no process-wide state.

use row_tree::NodeId;

use crate::config::PresentationConfig;
use crate::error::GroupCellError;
use crate::params::RenderParams;

// ============================================================================
// COLLABORATOR TRAITS
// ============================================================================

/// A sub-component owned by a cell (custom renderer, checkbox control).
pub trait CellComponent {
    /// Markup of the component's root element.
    fn gui(&self) -> String;

    /// Releases whatever the component holds. Called once, on cell teardown.
    fn destroy(&mut self) {}
}

/// Resolves renderer names to components.
pub trait CellRendererRegistry {
    fn create(
        &self,
        renderer: &str,
        params: &RenderParams,
    ) -> Result<Box<dyn CellComponent>, GroupCellError>;
}

/// Builds the selection control for a row.
pub trait SelectionControlFactory {
    fn create(&self, node: NodeId) -> Box<dyn CellComponent>;
}

/// Evaluates footer value expressions.
pub trait ExpressionEvaluator {
    fn evaluate(&self, expression: &str, params: &RenderParams) -> Result<String, GroupCellError>;
}

/// Supplies the expand/contract icon markup.
pub trait IconFactory {
    fn group_expanded(&self) -> String;
    fn group_contracted(&self) -> String;
}

/// Receives requests to re-render rows.
pub trait RowRefresher {
    fn refresh_rows(&self, nodes: &[NodeId]);
}

// ============================================================================
// DEFAULTS
// ============================================================================

/// Registry with nothing registered.
#[derive(Debug, Default)]
pub struct NoRenderers;

impl CellRendererRegistry for NoRenderers {
    fn create(
        &self,
        renderer: &str,
        _params: &RenderParams,
    ) -> Result<Box<dyn CellComponent>, GroupCellError> {
        Err(GroupCellError::UnknownRenderer(renderer.to_string()))
    }
}

/// Evaluator used when the grid has no expression support.
#[derive(Debug, Default)]
pub struct NoExpressions;

impl ExpressionEvaluator for NoExpressions {
    fn evaluate(&self, expression: &str, _params: &RenderParams) -> Result<String, GroupCellError> {
        Err(GroupCellError::Expression(format!("no evaluator for '{}'", expression)))
    }
}

#[derive(Debug, Default)]
pub struct NoRefresh;

impl RowRefresher for NoRefresh {
    fn refresh_rows(&self, _nodes: &[NodeId]) {}
}

/// Plain checkbox control.
#[derive(Debug)]
pub struct CheckboxControl {
    node: NodeId,
}

impl CellComponent for CheckboxControl {
    fn gui(&self) -> String {
        format!(r#"<input type="checkbox" class="group-row-select" data-node="{}">"#, self.node.0)
    }
}

#[derive(Debug, Default)]
pub struct DefaultSelectionControls;

impl SelectionControlFactory for DefaultSelectionControls {
    fn create(&self, node: NodeId) -> Box<dyn CellComponent> {
        Box::new(CheckboxControl { node })
    }
}

/// Built-in chevron icons.
#[derive(Debug, Default)]
pub struct DefaultIcons;

impl IconFactory for DefaultIcons {
    fn group_expanded(&self) -> String {
        r#"<svg width="10" height="10"><polygon points="0,2 10,2 5,8" /></svg>"#.to_string()
    }

    fn group_contracted(&self) -> String {
        r#"<svg width="10" height="10"><polygon points="2,0 8,5 2,10" /></svg>"#.to_string()
    }
}

// ============================================================================
// SERVICES BUNDLE
// ============================================================================

/// Everything a group cell needs besides the tree and the column model.
pub struct CellServices {
    pub config: PresentationConfig,
    pub renderers: Box<dyn CellRendererRegistry>,
    pub selection: Box<dyn SelectionControlFactory>,
    pub expressions: Box<dyn ExpressionEvaluator>,
    pub icons: Box<dyn IconFactory>,
    pub refresher: Box<dyn RowRefresher>,
}

impl CellServices {
    /// Services with default collaborators.
    pub fn new(config: PresentationConfig) -> Self {
        CellServices {
            config,
            renderers: Box::new(NoRenderers),
            selection: Box::new(DefaultSelectionControls),
            expressions: Box::new(NoExpressions),
            icons: Box::new(DefaultIcons),
            refresher: Box::new(NoRefresh),
        }
    }

    pub fn with_renderers(mut self, renderers: impl CellRendererRegistry + 'static) -> Self {
        self.renderers = Box::new(renderers);
        self
    }

    pub fn with_selection(mut self, selection: impl SelectionControlFactory + 'static) -> Self {
        self.selection = Box::new(selection);
        self
    }

    pub fn with_expressions(mut self, expressions: impl ExpressionEvaluator + 'static) -> Self {
        self.expressions = Box::new(expressions);
        self
    }

    pub fn with_icons(mut self, icons: impl IconFactory + 'static) -> Self {
        self.icons = Box::new(icons);
        self
    }

    pub fn with_refresher(mut self, refresher: impl RowRefresher + 'static) -> Self {
        self.refresher = Box::new(refresher);
        self
    }
}
