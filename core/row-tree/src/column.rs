//! FILENAME: core/row-tree/src/column.rs
//! Column identity and the column model consulted by grouped rendering.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identity of a column. Two handles to the same column compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        ColumnId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which pinned section a column (or a rendered cell) lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pinned {
    Left,
    Right,
}

/// User-supplied column definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    /// Name of a registered cell renderer used for this column's cells.
    #[serde(default)]
    pub cell_renderer: Option<String>,

    /// Renderer configuration object handed to `cell_renderer`.
    #[serde(default)]
    pub cell_renderer_params: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,

    #[serde(default)]
    pub pinned: Option<Pinned>,

    #[serde(default)]
    pub col_def: Option<ColumnDef>,
}

impl Column {
    pub fn new(id: impl Into<String>) -> Self {
        Column {
            id: ColumnId::new(id),
            pinned: None,
            col_def: None,
        }
    }

    pub fn with_pinned(mut self, pinned: Pinned) -> Self {
        self.pinned = Some(pinned);
        self
    }

    pub fn with_col_def(mut self, col_def: ColumnDef) -> Self {
        self.col_def = Some(col_def);
        self
    }

    /// The registered renderer name of this column, if any.
    pub fn cell_renderer(&self) -> Option<&str> {
        self.col_def.as_ref().and_then(|d| d.cell_renderer.as_deref())
    }

    pub fn cell_renderer_params(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.col_def.as_ref().and_then(|d| d.cell_renderer_params.as_ref())
    }
}

// ============================================================================
// COLUMN MODEL
// ============================================================================

/// Column and grouping configuration as seen by grouped rendering.
#[derive(Debug, Clone, Default)]
pub struct ColumnModel {
    columns: FxHashMap<ColumnId, Column>,

    /// Active row-group columns, outermost first.
    row_group_columns: Vec<ColumnId>,

    pivot_mode: bool,
}

impl ColumnModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a column.
    pub fn add_column(&mut self, column: Column) {
        self.columns.insert(column.id.clone(), column);
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Sets the ordered row-group columns. Unknown ids are kept and simply
    /// fail to resolve.
    pub fn set_row_group_columns(&mut self, ids: Vec<ColumnId>) {
        self.row_group_columns = ids;
    }

    pub fn row_group_columns(&self) -> &[ColumnId] {
        &self.row_group_columns
    }

    /// The column producing the grouping level at `index`.
    pub fn row_group_column(&self, index: usize) -> Option<&Column> {
        self.row_group_columns
            .get(index)
            .and_then(|id| self.columns.get(id))
    }

    pub fn set_pivot_mode(&mut self, pivot_mode: bool) {
        self.pivot_mode = pivot_mode;
    }

    pub fn is_pivot_mode(&self) -> bool {
        self.pivot_mode
    }

    /// True when any column is pinned to the left, i.e. the grid has a
    /// left-pinned area.
    pub fn is_pinning_left(&self) -> bool {
        self.columns
            .values()
            .any(|c| c.pinned == Some(Pinned::Left))
    }
}
