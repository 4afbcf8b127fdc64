//! FILENAME: core/group-cell/src/expand.rs
//! Expand/contract controller.
//!
//! State is recomputed from the node on every triggering event; the
//! controller keeps only the last computed state.

use row_tree::{NodeId, RowNode};
use serde::{Deserialize, Serialize};

use crate::view::GroupCellView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconState {
    /// Contracted icon shown; activating expands.
    Contracted,
    /// Expanded icon shown; activating contracts.
    Expanded,
    /// Neither icon shown.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Other,
}

/// User input delivered to a group cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellInput {
    ExpandedIconClick,
    ContractedIconClick,
    DoubleClick,
    KeyDown(KeyCode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    Toggled {
        node: NodeId,
        expanded: bool,
        refresh_requested: bool,
    },
}

#[derive(Debug, Clone)]
pub struct ExpandContractController {
    state: IconState,
}

impl Default for ExpandContractController {
    fn default() -> Self {
        ExpandContractController {
            state: IconState::Hidden,
        }
    }
}

impl ExpandContractController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> IconState {
        self.state
    }

    /// Icon state for a node. Footers and pivot leaf groups never show icons.
    pub fn evaluate(node: &RowNode, expandable: bool, pivot_mode: bool) -> IconState {
        let reduced_leaf = pivot_mode && node.leaf_group;
        if !expandable || node.footer || reduced_leaf {
            IconState::Hidden
        } else if node.expanded {
            IconState::Expanded
        } else {
            IconState::Contracted
        }
    }

    /// Recomputes the state and writes icon visibility into the view.
    pub fn refresh(
        &mut self,
        node: &RowNode,
        expandable: bool,
        pivot_mode: bool,
        view: &mut GroupCellView,
    ) {
        let state = Self::evaluate(node, expandable, pivot_mode);
        if state != self.state {
            log::debug!("GROUPCELL|icon state node={} {:?} -> {:?}", node.id, self.state, state);
        }
        self.state = state;
        view.expanded_icon_visible = state == IconState::Expanded;
        view.contracted_icon_visible = state == IconState::Contracted;
    }

    /// Whether `input` asks for an expand/contract toggle.
    ///
    /// Double-click is reserved for editing when group editing is on. Enter
    /// is accepted by the cell but does not toggle until editability of the
    /// cell can be checked.
    pub fn is_activation(input: CellInput, enable_group_edit: bool) -> bool {
        match input {
            CellInput::ExpandedIconClick | CellInput::ContractedIconClick => true,
            CellInput::DoubleClick => !enable_group_edit,
            CellInput::KeyDown(_) => false,
        }
    }

    /// Toggles only make sense while an icon is showing.
    pub fn can_toggle(&self) -> bool {
        self.state != IconState::Hidden
    }
}
