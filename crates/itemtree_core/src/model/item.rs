//! Directory item domain model.
//!
//! # Responsibility
//! - Define the flat directory record consumed by the tree engine.
//! - Define the depth-annotated row produced for nested views.
//!
//! # Invariants
//! - `id` is unique within one collection and never `ROOT_ID`.
//! - `parent == None` marks a top-level item.

use crate::tree::{NodeId, ROOT_ID};
use serde::{Deserialize, Serialize};

/// One directory entry with a parent pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique, non-zero identifier.
    pub id: NodeId,
    /// Sequence used to order siblings.
    pub seq_id: u64,
    /// Owning item, `None` for top-level items.
    pub parent: Option<NodeId>,
    /// Display name, e.g. a file or folder name.
    pub name: String,
}

impl Item {
    pub fn new(id: NodeId, seq_id: u64, parent: Option<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id,
            seq_id,
            parent,
            name: name.into(),
        }
    }

    /// Creates an item without parent.
    pub fn top_level(id: NodeId, seq_id: u64, name: impl Into<String>) -> Self {
        Self::new(id, seq_id, None, name)
    }

    /// Blank payload carried by the synthetic root node.
    pub(crate) fn root_placeholder() -> Self {
        Self::new(ROOT_ID, 0, None, "")
    }
}

/// Item rendered with its position in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult {
    pub id: NodeId,
    pub seq_id: u64,
    pub name: String,
    /// `None` for top-level items.
    pub parent: Option<NodeId>,
    /// Parent edges between this item and its top-level ancestor.
    pub depth: usize,
}
