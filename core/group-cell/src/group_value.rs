//! FILENAME: core/group-cell/src/group_value.rs
//! Group name assignment into render params.

use row_tree::RowTreeAccess;

use crate::params::RenderParams;

/// Fills the group name into `params`.
///
/// The group row supplying the name is the driving node itself, or its
/// parent for detail rows. `value` becomes the group key and `actual_value`
/// the key's display name from `key_map` (the key when unmapped).
///
/// With `overwrite` off only missing values are filled, so caller-supplied
/// values win. Promoted cells pass `overwrite` because the caller's values
/// describe the row that was replaced.
pub fn assign_group_values<T>(tree: &T, params: &mut RenderParams, overwrite: bool)
where
    T: RowTreeAccess + ?Sized,
{
    let Some(driving) = tree.node(params.node) else {
        return;
    };
    let source = if driving.group {
        Some(driving)
    } else {
        driving.parent.and_then(|p| tree.node(p))
    };
    let Some(key) = source.and_then(|n| n.key.as_deref()) else {
        return;
    };

    if overwrite || params.value.is_none() {
        params.value = Some(key.to_string());
    }
    if overwrite || params.actual_value.is_none() {
        let display = params.key_map.get(key).map(String::as_str).unwrap_or(key);
        params.actual_value = Some(display.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use row_tree::{ColumnId, NodeId, RowTree};

    fn tree() -> (RowTree, NodeId, NodeId) {
        let mut tree = RowTree::new();
        let group = tree.add_group(None, "IE", ColumnId::new("country"), 0).unwrap();
        let leaf = tree.add_leaf(Some(group)).unwrap();
        (tree, group, leaf)
    }

    #[test]
    fn test_group_key_fills_missing_values() {
        let (tree, group, _) = tree();
        let mut params = RenderParams::new(group, ColumnId::new("country"));
        assign_group_values(&tree, &mut params, false);
        assert_eq!(params.value.as_deref(), Some("IE"));
        assert_eq!(params.actual_value.as_deref(), Some("IE"));
    }

    #[test]
    fn test_key_map_supplies_display_name() {
        let (tree, group, _) = tree();
        let mut params = RenderParams::new(group, ColumnId::new("country"));
        params.key_map.insert("IE".to_string(), "Ireland".to_string());
        assign_group_values(&tree, &mut params, false);
        assert_eq!(params.value.as_deref(), Some("IE"));
        assert_eq!(params.actual_value.as_deref(), Some("Ireland"));
    }

    #[test]
    fn test_leaf_uses_parent_key_but_keeps_supplied_values() {
        let (tree, _, leaf) = tree();
        let mut params =
            RenderParams::new(leaf, ColumnId::new("country")).with_actual_value("Widget");
        assign_group_values(&tree, &mut params, false);
        assert_eq!(params.value.as_deref(), Some("IE"));
        assert_eq!(params.actual_value.as_deref(), Some("Widget"));
    }

    #[test]
    fn test_overwrite_replaces_supplied_values() {
        let (tree, group, _) = tree();
        let mut params =
            RenderParams::new(group, ColumnId::new("country")).with_actual_value("Widget");
        assign_group_values(&tree, &mut params, true);
        assert_eq!(params.actual_value.as_deref(), Some("IE"));
    }

    #[test]
    fn test_root_leaf_is_left_alone() {
        let mut tree = RowTree::new();
        let leaf = tree.add_leaf(None).unwrap();
        let mut params = RenderParams::new(leaf, ColumnId::new("country"));
        assign_group_values(&tree, &mut params, true);
        assert!(params.value.is_none());
        assert!(params.actual_value.is_none());
    }
}
