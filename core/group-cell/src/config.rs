//! FILENAME: core/group-cell/src/config.rs
//! Presentation configuration - grid-wide flags read on every render.

use serde::{Deserialize, Serialize};

use crate::error::GroupCellError;

/// Grid-wide presentation flags consumed by group cells.
/// Missing keys take their default (all off).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationConfig {
    /// Intermediate grouping levels are hidden; a first-child row shows the
    /// group it opens instead.
    pub group_hide_open_parents: bool,

    /// Full-width rows are embedded in the pinned and body sections.
    pub embed_full_width_rows: bool,

    /// Right-to-left layout.
    pub enable_rtl: bool,

    /// Group cells are editable; double-click starts editing.
    pub enable_group_edit: bool,

    /// Groups get a footer (total) row.
    pub group_include_footer: bool,
}

impl PresentationConfig {
    /// Parses grid options from JSON.
    pub fn from_json(json: &str) -> Result<Self, GroupCellError> {
        Ok(serde_json::from_str(json)?)
    }
}
