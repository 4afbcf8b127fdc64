//! FILENAME: core/group-cell/src/child_count.rs
//! Child count label shown after group names.

use row_tree::RowNode;

/// "(n)" when the node tracks its descendant count, empty otherwise.
pub fn child_count_label(all_children_count: Option<i64>) -> String {
    match all_children_count {
        Some(count) if count >= 0 => format!("({})", count),
        _ => String::new(),
    }
}

pub fn label_for(node: &RowNode) -> String {
    child_count_label(node.all_children_count)
}
