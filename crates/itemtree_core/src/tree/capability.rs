//! Capability contract that parameterizes the engine over a record family.

use crate::tree::node::TreeNode;
use crate::tree::TreeResult;
use std::cmp::Ordering;

/// Record-specific operations the engine delegates to.
///
/// Implementations own the concrete record and rendered output types; the
/// engine only moves nodes around and computes depth.
pub trait TreeCapability {
    /// Caller record type.
    type Record;
    /// Node payload, usually a copy of `Record`.
    type Payload;
    /// Rendered output row.
    type Output;

    /// Checks structural invariants of the whole collection.
    fn validate_collection(&self, records: &[Self::Record]) -> TreeResult<()>;

    /// Returns a fresh synthetic root: reserved id, no parent, no children.
    fn make_root(&self) -> TreeNode<Self::Payload>;

    /// Maps records to childless nodes in input order without touching input.
    fn collection_to_nodes(&self, records: &[Self::Record]) -> Vec<TreeNode<Self::Payload>>;

    /// Orders two sibling nodes.
    fn compare_siblings(&self, a: &TreeNode<Self::Payload>, b: &TreeNode<Self::Payload>)
        -> Ordering;

    /// Renders one non-root node at `depth`.
    fn make_result(&self, node: &TreeNode<Self::Payload>, depth: usize) -> Self::Output;
}
