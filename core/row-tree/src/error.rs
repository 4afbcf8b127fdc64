//! FILENAME: core/row-tree/src/error.rs

use thiserror::Error;

use crate::events::SubscriptionId;
use crate::node::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Row node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Subscription not found: {0:?}")]
    SubscriptionNotFound(SubscriptionId),

    #[error("Row node {child} cannot be attached under {parent}: {reason}")]
    InvalidParent {
        child: NodeId,
        parent: NodeId,
        reason: String,
    },
}
