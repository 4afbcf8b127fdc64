//! FILENAME: core/row-tree/src/node.rs
//! Row Node - a single node of the grouped row hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::column::ColumnId;

/// Stable identifier of a row node inside its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the hierarchical row tree.
///
/// Nodes are created and destroyed by the tree only. Everything outside the
/// tree reads them; the single sanctioned mutation is `set_expanded`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowNode {
    pub id: NodeId,

    /// Group key for group rows (the value this level groups by).
    #[serde(default)]
    pub key: Option<String>,

    /// Aggregation row.
    #[serde(default)]
    pub group: bool,

    /// Synthetic total row below a group's children.
    #[serde(default)]
    pub footer: bool,

    /// Floating (pinned top/bottom) row. Never selectable.
    #[serde(default)]
    pub floating: bool,

    /// Flower (master/detail child) row. Never selectable.
    #[serde(default)]
    pub flower: bool,

    /// Back-reference to the parent. Carries no ownership.
    #[serde(default)]
    pub parent: Option<NodeId>,

    /// Position among the parent's children.
    #[serde(default)]
    pub child_index: usize,

    /// Column this node groups by (group rows only).
    #[serde(default)]
    pub row_group_column: Option<ColumnId>,

    /// Index into the ordered list of active row-group columns.
    #[serde(default)]
    pub row_group_index: Option<usize>,

    /// Rendering depth used for indentation.
    #[serde(default)]
    pub ui_level: i32,

    #[serde(default)]
    pub expanded: bool,

    /// Descendant count. Negative or absent means the count is not tracked.
    #[serde(default)]
    pub all_children_count: Option<i64>,

    /// Lowest real grouping level in pivot mode.
    #[serde(default)]
    pub leaf_group: bool,

    #[serde(default)]
    pub children: SmallVec<[NodeId; 4]>,
}

impl RowNode {
    /// Creates a detail (leaf) row.
    pub fn leaf(id: NodeId) -> Self {
        RowNode {
            id,
            key: None,
            group: false,
            footer: false,
            floating: false,
            flower: false,
            parent: None,
            child_index: 0,
            row_group_column: None,
            row_group_index: None,
            ui_level: 0,
            expanded: false,
            all_children_count: None,
            leaf_group: false,
            children: SmallVec::new(),
        }
    }

    /// Creates a group row for the given grouping column and level.
    pub fn group(
        id: NodeId,
        key: impl Into<String>,
        column: ColumnId,
        row_group_index: usize,
    ) -> Self {
        RowNode {
            key: Some(key.into()),
            group: true,
            row_group_column: Some(column),
            row_group_index: Some(row_group_index),
            ..RowNode::leaf(id)
        }
    }

    /// Creates the footer row of a group. Footers share the group's key and level.
    pub fn footer_of(id: NodeId, group: &RowNode) -> Self {
        RowNode {
            key: group.key.clone(),
            group: true,
            footer: true,
            row_group_column: group.row_group_column.clone(),
            row_group_index: group.row_group_index,
            ..RowNode::leaf(id)
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when this node is the first child of an existing parent.
    pub fn is_first_child(&self) -> bool {
        self.parent.is_some() && self.child_index == 0
    }

    /// True when the node can never carry a selection control.
    pub fn is_unselectable(&self) -> bool {
        self.footer || self.floating || self.flower
    }

    /// Sets expanded state (builder style).
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}
