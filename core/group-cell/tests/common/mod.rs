//! FILENAME: core/group-cell/tests/common/mod.rs
//! Test harness and fixtures for group cell integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use group_cell::{
    CellComponent, CellInput, CellRendererRegistry, CellServices, ExpressionEvaluator,
    GroupCellError, GroupCellRenderer, InputOutcome, PresentationConfig, RenderParams,
    RowRefresher, SelectionControlFactory,
};
use row_tree::{Column, ColumnId, ColumnModel, ListenerId, NodeId, RowTree};

/// Shared log of component teardown, in call order.
pub type DestroyLog = Rc<RefCell<Vec<String>>>;

// ============================================================================
// RECORDING COLLABORATORS
// ============================================================================

pub struct RecordingComponent {
    name: String,
    markup: String,
    log: DestroyLog,
}

impl CellComponent for RecordingComponent {
    fn gui(&self) -> String {
        self.markup.clone()
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().push(self.name.clone());
    }
}

/// Knows every renderer name; renders "<name>:<actual value>".
pub struct RecordingRegistry {
    log: DestroyLog,
}

impl CellRendererRegistry for RecordingRegistry {
    fn create(
        &self,
        renderer: &str,
        params: &RenderParams,
    ) -> Result<Box<dyn CellComponent>, GroupCellError> {
        if renderer == "broken" {
            return Err(GroupCellError::UnknownRenderer(renderer.to_string()));
        }
        Ok(Box::new(RecordingComponent {
            name: renderer.to_string(),
            markup: format!("{}:{}", renderer, params.actual_value.as_deref().unwrap_or("")),
            log: self.log.clone(),
        }))
    }
}

pub struct RecordingSelection {
    log: DestroyLog,
}

impl SelectionControlFactory for RecordingSelection {
    fn create(&self, node: NodeId) -> Box<dyn CellComponent> {
        Box::new(RecordingComponent {
            name: "checkbox".to_string(),
            markup: format!("checkbox:{}", node.0),
            log: self.log.clone(),
        })
    }
}

/// Substitutes `{value}` with the params' value; "broken" fails.
pub struct TemplateExpressions;

impl ExpressionEvaluator for TemplateExpressions {
    fn evaluate(&self, expression: &str, params: &RenderParams) -> Result<String, GroupCellError> {
        if expression == "broken" {
            return Err(GroupCellError::Expression(expression.to_string()));
        }
        Ok(expression.replace("{value}", params.value.as_deref().unwrap_or("")))
    }
}

pub struct RecordingRefresher {
    refreshed: Rc<RefCell<Vec<NodeId>>>,
}

impl RowRefresher for RecordingRefresher {
    fn refresh_rows(&self, nodes: &[NodeId]) {
        self.refreshed.borrow_mut().extend_from_slice(nodes);
    }
}

// ============================================================================
// HARNESS
// ============================================================================

/// A minimal grid host: owns the tree, the column model and the cells, and
/// delivers tree notifications to cells by listener id.
pub struct TestHarness {
    pub tree: RowTree,
    pub columns: ColumnModel,
    pub cells: Vec<GroupCellRenderer>,
    pub destroyed: DestroyLog,
    pub refreshed: Rc<RefCell<Vec<NodeId>>>,
    services: Rc<CellServices>,
}

impl TestHarness {
    /// Create a harness with an empty tree.
    pub fn new(config: PresentationConfig) -> Self {
        let destroyed: DestroyLog = Rc::new(RefCell::new(Vec::new()));
        let refreshed = Rc::new(RefCell::new(Vec::new()));
        let services = CellServices::new(config)
            .with_renderers(RecordingRegistry { log: destroyed.clone() })
            .with_selection(RecordingSelection { log: destroyed.clone() })
            .with_expressions(TemplateExpressions)
            .with_refresher(RecordingRefresher { refreshed: refreshed.clone() });

        TestHarness {
            tree: RowTree::new(),
            columns: olympic_columns(),
            cells: Vec::new(),
            destroyed,
            refreshed,
            services: Rc::new(services),
        }
    }

    /// Renders a new cell and returns its index.
    pub fn render(&mut self, params: RenderParams) -> usize {
        let index = self.cells.len();
        let mut cell = GroupCellRenderer::new(self.services.clone(), ListenerId(index as u64));
        cell.init(&mut self.tree, &self.columns, params)
            .expect("cell should initialise");
        self.cells.push(cell);
        index
    }

    pub fn cell(&self, index: usize) -> &GroupCellRenderer {
        &self.cells[index]
    }

    pub fn input(&mut self, index: usize, input: CellInput) -> InputOutcome {
        self.cells[index]
            .handle_input(&mut self.tree, input)
            .expect("input should be handled")
    }

    /// Delivers queued tree notifications to their listeners.
    pub fn dispatch(&mut self) {
        for (listener, event) in self.tree.take_dispatch() {
            if let Some(cell) = self.cells.get_mut(listener.0 as usize) {
                cell.on_node_event(&self.tree, &self.columns, &event)
                    .expect("event should be handled");
            }
        }
    }

    pub fn destroy(&mut self, index: usize) {
        self.cells[index].destroy(&mut self.tree);
    }

    pub fn destroy_all(&mut self) {
        for cell in &mut self.cells {
            cell.destroy(&mut self.tree);
        }
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn sport() -> ColumnId {
    ColumnId::new("sport")
}

pub fn country() -> ColumnId {
    ColumnId::new("country")
}

pub fn year() -> ColumnId {
    ColumnId::new("year")
}

pub fn auto_group() -> ColumnId {
    ColumnId::new("ag-Grid-AutoColumn")
}

/// Row-group columns sport > country > year plus the auto-group column.
pub fn olympic_columns() -> ColumnModel {
    let mut columns = ColumnModel::new();
    columns.add_column(Column::new("sport"));
    columns.add_column(Column::new("country"));
    columns.add_column(Column::new("year"));
    columns.add_column(Column::new("ag-Grid-AutoColumn"));
    columns.set_row_group_columns(vec![sport(), country(), year()]);
    columns
}

/// Swimming (sport)
///   Ireland (country)
///     2008 (year)
///       leaf, leaf
///     2012 (year)
///       leaf
///   Norway (country)
///     2008 (year)
///       leaf
pub struct Olympics {
    pub swimming: NodeId,
    pub ireland: NodeId,
    pub ireland_2008: NodeId,
    pub ireland_2008_first: NodeId,
    pub ireland_2008_second: NodeId,
    pub ireland_2012: NodeId,
    pub ireland_2012_first: NodeId,
    pub norway: NodeId,
    pub norway_2008: NodeId,
    pub norway_2008_first: NodeId,
}

pub fn build_olympics(tree: &mut RowTree) -> Olympics {
    let swimming = tree.add_group(None, "Swimming", sport(), 0).unwrap();
    let ireland = tree.add_group(Some(swimming), "Ireland", country(), 1).unwrap();
    let ireland_2008 = tree.add_group(Some(ireland), "2008", year(), 2).unwrap();
    let ireland_2008_first = tree.add_leaf(Some(ireland_2008)).unwrap();
    let ireland_2008_second = tree.add_leaf(Some(ireland_2008)).unwrap();
    let ireland_2012 = tree.add_group(Some(ireland), "2012", year(), 2).unwrap();
    let ireland_2012_first = tree.add_leaf(Some(ireland_2012)).unwrap();
    let norway = tree.add_group(Some(swimming), "Norway", country(), 1).unwrap();
    let norway_2008 = tree.add_group(Some(norway), "2008", year(), 2).unwrap();
    let norway_2008_first = tree.add_leaf(Some(norway_2008)).unwrap();
    tree.refresh_all_children_counts();
    tree.take_dispatch();

    Olympics {
        swimming,
        ireland,
        ireland_2008,
        ireland_2008_first,
        ireland_2008_second,
        ireland_2012,
        ireland_2012_first,
        norway,
        norway_2008,
        norway_2008_first,
    }
}
