//! FILENAME: core/group-cell/src/placement.rs
//! Placement gates - whether a cell instance renders anything at all.

use row_tree::{ColumnId, Pinned};
use serde::{Deserialize, Serialize};

/// Physical section of the grid a cell lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    PinnedLeft,
    PinnedRight,
    Body,
}

impl From<Option<Pinned>> for Section {
    fn from(pinned: Option<Pinned>) -> Self {
        match pinned {
            Some(Pinned::Left) => Section::PinnedLeft,
            Some(Pinned::Right) => Section::PinnedRight,
            None => Section::Body,
        }
    }
}

/// In one-group-per-column mode, a cell only renders on rows of its own
/// grouping level. Skipped when the driving node was promoted.
pub fn is_group_key_mismatch(
    restrict_to_one_group: bool,
    node_was_swapped: bool,
    row_group_column: Option<&ColumnId>,
    target_group_column: &ColumnId,
) -> bool {
    if node_was_swapped || !restrict_to_one_group {
        return false;
    }
    row_group_column != Some(target_group_column)
}

/// The one section that renders an embedded full-width row's group cell.
pub fn embedded_row_section(enable_rtl: bool, pinning_left: bool) -> Section {
    match (enable_rtl, pinning_left) {
        (true, true) => Section::PinnedRight,
        (false, true) => Section::PinnedLeft,
        (_, false) => Section::Body,
    }
}

/// Embedded full-width rows span every section; only one of them may show
/// the group cell, otherwise it repeats.
pub fn is_embedded_row_mismatch(
    embed_full_width_rows: bool,
    enable_rtl: bool,
    pinning_left: bool,
    section: Section,
) -> bool {
    embed_full_width_rows && section != embedded_row_section(enable_rtl, pinning_left)
}
