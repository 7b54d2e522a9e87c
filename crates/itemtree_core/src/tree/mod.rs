//! Generic tree construction and pre-order flattening engine.
//!
//! # Responsibility
//! - Turn a flat parent-pointer collection into a depth-annotated listing.
//! - Stay generic over record shape through `TreeCapability`.
//!
//! # Invariants
//! - Identifier `ROOT_ID` is reserved for the synthetic root and never emitted.
//! - Every call is a one-shot transformation; no state survives between calls.
//! - Validation failures abort before any tree is built.
//!
//! # See also
//! - `service::item_service` for the directory item capability.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ancestry;
pub mod build;
pub mod capability;
pub mod flatten;
pub mod node;
pub mod transform;
pub mod validate;

pub use ancestry::{compute_depth_and_root, find_cycle, AncestryInfo};
pub use build::{build_tree, BuiltTree};
pub use capability::TreeCapability;
pub use flatten::flatten_tree;
pub use node::{NodeId, TreeNode, ROOT_ID};
pub use transform::{
    transform_items, transform_items_report, transform_items_with, TransformOptions,
    TransformReport, UnreachablePolicy,
};
pub use validate::validate_links;

/// Result type used by tree engine operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised while validating or assembling a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Two or more records share this identifier.
    DuplicateIdentifier(NodeId),
    /// A record points at a parent identifier that no record owns.
    DanglingParentReference(NodeId),
    /// A record uses the identifier reserved for the synthetic root.
    ReservedIdentifierUsed,
    /// Walking up from `node_id` revisits a node; `parent_id` closes the loop.
    CycleDetected { node_id: NodeId, parent_id: NodeId },
    /// Node sits deeper than the configured depth guard.
    DepthLimitExceeded { node_id: NodeId, limit: usize },
}

impl TreeError {
    /// Stable error code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentifier(_) => "duplicate_identifier",
            Self::DanglingParentReference(_) => "dangling_parent_reference",
            Self::ReservedIdentifierUsed => "reserved_identifier_used",
            Self::CycleDetected { .. } => "cycle_detected",
            Self::DepthLimitExceeded { .. } => "depth_limit_exceeded",
        }
    }
}

impl Display for TreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifier(id) => {
                write!(f, "there are duplicate entries: id {id} appears more than once")
            }
            Self::DanglingParentReference(id) => {
                write!(f, "parent id {id} does not exist in items list")
            }
            Self::ReservedIdentifierUsed => write!(
                f,
                "item id cannot be {ROOT_ID} as this is reserved for the root node"
            ),
            Self::CycleDetected { node_id, parent_id } => write!(
                f,
                "cycle detected in {node_id} -> {parent_id}: {node_id} has already been visited"
            ),
            Self::DepthLimitExceeded { node_id, limit } => {
                write!(f, "node {node_id} exceeds maximum tree depth {limit}")
            }
        }
    }
}

impl Error for TreeError {}
