//! FILENAME: core/group-cell/src/promotion.rs
//! Node promotion for hidden open parents.
//!
//! With intermediate group levels hidden, the first row under a group has
//! to show that group's label. A row therefore renders an ancestor when it
//! reaches it purely through first-child links and the ancestor groups by
//! the column being rendered.

use row_tree::{ColumnId, NodeId, RowTreeAccess};

/// Walks up from `node` while every step is a first child. Returns the
/// first ancestor grouped by `target`, or `None` as soon as a node is not
/// its parent's first child (or has no parent).
pub fn resolve_promoted_node<T>(tree: &T, node: NodeId, target: &ColumnId) -> Option<NodeId>
where
    T: RowTreeAccess + ?Sized,
{
    let mut current = tree.node(node)?;
    loop {
        if !current.is_first_child() {
            return None;
        }
        let parent_id = current.parent?;
        let parent = tree.node(parent_id)?;
        if parent.row_group_column.as_ref() == Some(target) {
            return Some(parent_id);
        }
        current = parent;
    }
}
