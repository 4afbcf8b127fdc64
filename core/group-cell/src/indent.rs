//! FILENAME: core/group-cell/src/indent.rs
//! Indentation of the group cell from tree depth.

use row_tree::RowNode;

use crate::view::{Edge, Indent};

/// Indent per level when the params carry no padding override.
pub const DEFAULT_LEVEL_PADDING_PX: i64 = 10;

/// Footers sit under their group's children.
pub const FOOTER_EXTRA_PX: i64 = 15;

/// Rows without an expand icon are shifted to line up with icon rows.
pub const NO_ICON_EXTRA_PX: i64 = 10;

/// Pixel indentation for `node`. Top-level nodes (`ui_level <= 0`) are never
/// indented, whatever the override.
pub fn compute_indent_px(
    node: &RowNode,
    padding_override: Option<i32>,
    expandable: bool,
    pivot_mode: bool,
) -> u32 {
    if node.ui_level <= 0 {
        return 0;
    }

    let per_level = match padding_override {
        Some(p) if p >= 0 => i64::from(p),
        _ => DEFAULT_LEVEL_PADDING_PX,
    };
    let mut px = i64::from(node.ui_level) * per_level;

    let reduced_leaf = pivot_mode && node.leaf_group;
    if node.footer {
        px += FOOTER_EXTRA_PX;
    } else if !expandable || reduced_leaf {
        px += NO_ICON_EXTRA_PX;
    }

    u32::try_from(px).unwrap_or(u32::MAX)
}

/// Indentation goes on the leading edge: right under RTL, left otherwise.
pub fn leading_edge(enable_rtl: bool) -> Edge {
    if enable_rtl {
        Edge::Right
    } else {
        Edge::Left
    }
}

pub fn indent_for(
    node: &RowNode,
    padding_override: Option<i32>,
    expandable: bool,
    pivot_mode: bool,
    enable_rtl: bool,
) -> Indent {
    Indent {
        edge: leading_edge(enable_rtl),
        px: compute_indent_px(node, padding_override, expandable, pivot_mode),
    }
}
