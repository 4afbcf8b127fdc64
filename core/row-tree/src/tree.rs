//! FILENAME: core/row-tree/src/tree.rs
//! Row Tree - in-memory arena holding the grouped row hierarchy.
//!
//! The arena owns every node. Parent links are plain ids, so a node never
//! keeps its parent alive. Mutations that other parties care about queue a
//! `NodeEvent`; the host drains them with `take_dispatch` and delivers them
//! in emission order.

use rustc_hash::FxHashMap;

use crate::column::ColumnId;
use crate::error::TreeError;
use crate::events::{EventRegistry, ListenerId, NodeEvent, NodeEventKind, SubscriptionId};
use crate::node::{NodeId, RowNode};

// ============================================================================
// COLLABORATOR INTERFACE
// ============================================================================

/// What grouped rendering is allowed to do with the row tree.
pub trait RowTreeAccess {
    fn node(&self, id: NodeId) -> Option<&RowNode>;

    /// Whether the node can be expanded or collapsed.
    fn is_expandable(&self, id: NodeId) -> bool;

    /// The only mutation grouped rendering may request.
    fn set_expanded(&mut self, id: NodeId, expanded: bool) -> Result<(), TreeError>;

    fn subscribe(
        &mut self,
        node: NodeId,
        kind: NodeEventKind,
        listener: ListenerId,
    ) -> SubscriptionId;

    /// Fails with `SubscriptionNotFound` when the subscription no longer
    /// exists, e.g. because its node was removed.
    fn unsubscribe(&mut self, subscription: SubscriptionId) -> Result<(), TreeError>;
}

// ============================================================================
// ARENA
// ============================================================================

#[derive(Debug, Default)]
pub struct RowTree {
    nodes: FxHashMap<NodeId, RowNode>,
    roots: Vec<NodeId>,
    next_id: u32,
    events: EventRegistry,
}

impl RowTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node under `parent` (or as a root) and returns its new id.
    ///
    /// The tree assigns `id`, `parent` and `child_index`. Children get
    /// `ui_level = parent.ui_level + 1`; roots keep the level they carry.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        mut node: RowNode,
    ) -> Result<NodeId, TreeError> {
        let id = NodeId(self.next_id);

        match parent {
            Some(parent_id) => {
                let parent_node = self
                    .nodes
                    .get_mut(&parent_id)
                    .ok_or(TreeError::NodeNotFound(parent_id))?;
                if !parent_node.group {
                    return Err(TreeError::InvalidParent {
                        child: id,
                        parent: parent_id,
                        reason: "parent is not a group row".to_string(),
                    });
                }
                node.parent = Some(parent_id);
                node.child_index = parent_node.children.len();
                node.ui_level = parent_node.ui_level + 1;
                parent_node.children.push(id);
            }
            None => {
                node.parent = None;
                node.child_index = self.roots.len();
                self.roots.push(id);
            }
        }

        self.next_id += 1;
        node.id = id;
        node.children.clear();
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Adds a group row for `column` at grouping depth `row_group_index`.
    pub fn add_group(
        &mut self,
        parent: Option<NodeId>,
        key: &str,
        column: ColumnId,
        row_group_index: usize,
    ) -> Result<NodeId, TreeError> {
        self.insert(parent, RowNode::group(NodeId(0), key, column, row_group_index))
    }

    pub fn add_leaf(&mut self, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        self.insert(parent, RowNode::leaf(NodeId(0)))
    }

    /// Adds the footer row of `group` as its last child.
    pub fn add_footer(&mut self, group: NodeId) -> Result<NodeId, TreeError> {
        let template = self.nodes.get(&group).ok_or(TreeError::NodeNotFound(group))?;
        let footer = RowNode::footer_of(NodeId(0), template);
        self.insert(Some(group), footer)
    }

    /// Removes a node and its whole subtree. Later siblings move up one
    /// position, which is exactly the kind of change that re-decides which
    /// node is a first child.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.nodes.get(&id).ok_or(TreeError::NodeNotFound(id))?;
        let parent = node.parent;

        let siblings: Vec<NodeId> = match parent {
            Some(parent_id) => {
                let parent_node = self
                    .nodes
                    .get_mut(&parent_id)
                    .ok_or(TreeError::NodeNotFound(parent_id))?;
                parent_node.children.retain(|c| *c != id);
                parent_node.children.to_vec()
            }
            None => {
                self.roots.retain(|r| *r != id);
                self.roots.clone()
            }
        };
        for (index, sibling) in siblings.iter().enumerate() {
            if let Some(s) = self.nodes.get_mut(sibling) {
                s.child_index = index;
            }
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(removed) = self.nodes.remove(&current) {
                stack.extend(removed.children.iter().copied());
                self.events.forget_node(current);
            }
        }
        log::debug!("ROWTREE|removed node={} parent={:?}", id, parent);
        Ok(())
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // MUTATIONS THAT NOTIFY
    // ========================================================================

    /// Changes the rendering depth of a node.
    pub fn set_ui_level(&mut self, id: NodeId, ui_level: i32) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(&id).ok_or(TreeError::NodeNotFound(id))?;
        if node.ui_level != ui_level {
            node.ui_level = ui_level;
            self.events.emit(id, NodeEventKind::UiLevelChanged);
        }
        Ok(())
    }

    /// Sets the tracked descendant count. `None` stops tracking.
    pub fn set_all_children_count(
        &mut self,
        id: NodeId,
        count: Option<i64>,
    ) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(&id).ok_or(TreeError::NodeNotFound(id))?;
        if node.all_children_count != count {
            node.all_children_count = count;
            self.events.emit(id, NodeEventKind::AllChildrenCountChanged);
        }
        Ok(())
    }

    /// Recounts leaf descendants of every group row, the way a filter pass
    /// does. Footers are not counted. Emits a notification per changed node.
    pub fn refresh_all_children_counts(&mut self) {
        let roots = self.roots.clone();
        for root in roots {
            self.count_leaves(root);
        }
    }

    fn count_leaves(&mut self, id: NodeId) -> i64 {
        let Some(node) = self.nodes.get(&id) else {
            return 0;
        };
        if node.footer {
            return 0;
        }
        if !node.group {
            return 1;
        }
        let children = node.children.to_vec();
        let total: i64 = children.into_iter().map(|c| self.count_leaves(c)).sum();
        if let Some(node) = self.nodes.get_mut(&id) {
            if node.all_children_count != Some(total) {
                node.all_children_count = Some(total);
                self.events.emit(id, NodeEventKind::AllChildrenCountChanged);
            }
        }
        total
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    /// Drains queued notifications and pairs each with its listeners,
    /// preserving emission order and then subscription order.
    pub fn take_dispatch(&mut self) -> Vec<(ListenerId, NodeEvent)> {
        let pending = self.events.take_pending();
        let mut deliveries = Vec::new();
        for event in pending {
            for listener in self.events.listeners_for(&event) {
                deliveries.push((listener, event));
            }
        }
        deliveries
    }

    pub fn subscription_count(&self) -> usize {
        self.events.subscription_count()
    }

    pub fn subscriptions_of(&self, listener: ListenerId) -> usize {
        self.events.subscriptions_of(listener)
    }
}

impl RowTreeAccess for RowTree {
    fn node(&self, id: NodeId) -> Option<&RowNode> {
        self.nodes.get(&id)
    }

    fn is_expandable(&self, id: NodeId) -> bool {
        self.nodes
            .get(&id)
            .map(|n| n.group && n.has_children())
            .unwrap_or(false)
    }

    fn set_expanded(&mut self, id: NodeId, expanded: bool) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(&id).ok_or(TreeError::NodeNotFound(id))?;
        if node.expanded != expanded {
            node.expanded = expanded;
            log::debug!("ROWTREE|set_expanded node={} expanded={}", id, expanded);
            self.events.emit(id, NodeEventKind::ExpandedChanged);
        }
        Ok(())
    }

    fn subscribe(
        &mut self,
        node: NodeId,
        kind: NodeEventKind,
        listener: ListenerId,
    ) -> SubscriptionId {
        self.events.subscribe(node, kind, listener)
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) -> Result<(), TreeError> {
        if self.events.unsubscribe(subscription) {
            Ok(())
        } else {
            Err(TreeError::SubscriptionNotFound(subscription))
        }
    }
}
