//! FILENAME: core/row-tree/src/lib.rs
//! Row tree subsystem for the grouped grid.
//!
//! This crate is the collaborator that owns grouped row nodes. The group
//! cell presentation core only reads nodes, asks for expansion changes and
//! listens to node-level notifications through [`RowTreeAccess`].
//!
//! Layers:
//! - `node`: Row node data (what a row IS)
//! - `column`: Grouping column identity and column model
//! - `events`: Node-level change notifications and subscriptions
//! - `tree`: In-memory arena implementation of the tree

pub mod column;
pub mod error;
pub mod events;
pub mod node;
pub mod tree;

pub use column::{Column, ColumnDef, ColumnId, ColumnModel, Pinned};
pub use error::TreeError;
pub use events::{ListenerId, NodeEvent, NodeEventKind, SubscriptionId};
pub use node::{NodeId, RowNode};
pub use tree::{RowTree, RowTreeAccess};
