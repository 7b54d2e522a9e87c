//! Addressable tree node.

/// Identifier shared by records and nodes.
pub type NodeId = u64;

/// Identifier reserved for the synthetic root node.
pub const ROOT_ID: NodeId = 0;

/// One node of the assembled tree.
///
/// A node exclusively owns its `children`; `payload` is the originating record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<P> {
    /// Record identifier, `ROOT_ID` for the synthetic root.
    pub id: NodeId,
    /// Parent identifier. `None` only for the synthetic root.
    pub parent: Option<NodeId>,
    /// Originating record.
    pub payload: P,
    /// Children in comparator order once the tree is built.
    pub children: Vec<TreeNode<P>>,
}

impl<P> TreeNode<P> {
    /// Creates a childless node for one record.
    ///
    /// A record without parent hangs off the synthetic root, so `None` maps to
    /// `ROOT_ID`.
    pub fn from_record(id: NodeId, parent: Option<NodeId>, payload: P) -> Self {
        Self {
            id,
            parent: Some(parent.unwrap_or(ROOT_ID)),
            payload,
            children: Vec::new(),
        }
    }

    /// Creates the synthetic root node around a placeholder payload.
    pub fn root(payload: P) -> Self {
        Self {
            id: ROOT_ID,
            parent: None,
            payload,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID && self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Parent identifier as the record saw it: top-level nodes report `None`.
    pub fn record_parent(&self) -> Option<NodeId> {
        self.parent.filter(|parent| *parent != ROOT_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::{TreeNode, ROOT_ID};

    #[test]
    fn missing_parent_maps_to_root() {
        let node = TreeNode::from_record(7, None, "x");
        assert_eq!(node.parent, Some(ROOT_ID));
        assert_eq!(node.record_parent(), None);
        assert!(node.is_leaf());
        assert!(!node.is_root());
    }

    #[test]
    fn explicit_parent_passes_through() {
        let node = TreeNode::from_record(2, Some(5), ());
        assert_eq!(node.parent, Some(5));
        assert_eq!(node.record_parent(), Some(5));
    }

    #[test]
    fn root_has_no_parent() {
        let root = TreeNode::root(());
        assert!(root.is_root());
        assert_eq!(root.id, ROOT_ID);
    }
}
