//! FILENAME: core/row-tree/src/events.rs
//! Node-level change notifications.
//!
//! Listeners subscribe per node and per event kind. Events are queued in
//! the order the tree emits them and handed back to the host for dispatch;
//! nothing is reordered or batched.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::node::NodeId;

/// The three node-level notifications grouped rendering listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeEventKind {
    ExpandedChanged,
    UiLevelChanged,
    AllChildrenCountChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEvent {
    pub node: NodeId,
    pub kind: NodeEventKind,
}

/// Identifies the party a notification is delivered to (e.g. one cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// Handle returned by `subscribe`, required to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

#[derive(Debug, Clone, Copy)]
struct Subscription {
    node: NodeId,
    kind: NodeEventKind,
    listener: ListenerId,
}

/// Subscription bookkeeping plus the ordered queue of emitted events.
#[derive(Debug, Default)]
pub struct EventRegistry {
    next_id: u64,
    subscriptions: FxHashMap<SubscriptionId, Subscription>,
    /// Subscriptions per (node, kind), in subscription order.
    by_target: FxHashMap<(NodeId, NodeEventKind), SmallVec<[SubscriptionId; 4]>>,
    pending: Vec<NodeEvent>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        node: NodeId,
        kind: NodeEventKind,
        listener: ListenerId,
    ) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.insert(id, Subscription { node, kind, listener });
        self.by_target.entry((node, kind)).or_default().push(id);
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(sub) = self.subscriptions.remove(&id) else {
            return false;
        };
        if let Some(list) = self.by_target.get_mut(&(sub.node, sub.kind)) {
            list.retain(|s| *s != id);
            if list.is_empty() {
                self.by_target.remove(&(sub.node, sub.kind));
            }
        }
        true
    }

    /// Drops every subscription against a node (the node is going away).
    pub fn forget_node(&mut self, node: NodeId) {
        let ids: Vec<SubscriptionId> = self
            .subscriptions
            .iter()
            .filter(|(_, s)| s.node == node)
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            self.unsubscribe(id);
        }
    }

    pub fn emit(&mut self, node: NodeId, kind: NodeEventKind) {
        self.pending.push(NodeEvent { node, kind });
    }

    /// Listeners for an event, in subscription order.
    pub fn listeners_for(&self, event: &NodeEvent) -> Vec<ListenerId> {
        self.by_target
            .get(&(event.node, event.kind))
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.subscriptions.get(id))
                    .map(|s| s.listener)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn take_pending(&mut self) -> Vec<NodeEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Number of live subscriptions held by one listener.
    pub fn subscriptions_of(&self, listener: ListenerId) -> usize {
        self.subscriptions
            .values()
            .filter(|s| s.listener == listener)
            .count()
    }
}
