//! Pre-order flattening of an assembled tree.

use crate::tree::capability::TreeCapability;
use crate::tree::node::TreeNode;

/// Flattens the forest under `root` into rendered rows.
///
/// The synthetic root itself is never rendered. Each node is followed by its
/// whole subtree before the next sibling; top-level nodes have depth 0.
/// Passing a non-root node flattens that subtree with the node at depth 0.
pub fn flatten_tree<C: TreeCapability>(
    capability: &C,
    root: &TreeNode<C::Payload>,
) -> Vec<C::Output> {
    let mut results = Vec::new();
    if !root.is_root() {
        push_subtree(capability, root, 0, &mut results);
        return results;
    }
    for child in &root.children {
        push_subtree(capability, child, 0, &mut results);
    }
    results
}

fn push_subtree<C: TreeCapability>(
    capability: &C,
    node: &TreeNode<C::Payload>,
    depth: usize,
    results: &mut Vec<C::Output>,
) {
    results.push(capability.make_result(node, depth));
    if node.is_leaf() {
        return;
    }
    for child in &node.children {
        push_subtree(capability, child, depth + 1, results);
    }
}

#[cfg(test)]
mod tests {
    use super::flatten_tree;
    use crate::tree::capability::TreeCapability;
    use crate::tree::node::{NodeId, TreeNode};
    use crate::tree::TreeResult;
    use std::cmp::Ordering;

    struct Labels;

    impl TreeCapability for Labels {
        type Record = ();
        type Payload = &'static str;
        type Output = String;

        fn validate_collection(&self, _records: &[()]) -> TreeResult<()> {
            Ok(())
        }

        fn make_root(&self) -> TreeNode<&'static str> {
            TreeNode::root("")
        }

        fn collection_to_nodes(&self, _records: &[()]) -> Vec<TreeNode<&'static str>> {
            Vec::new()
        }

        fn compare_siblings(
            &self,
            _a: &TreeNode<&'static str>,
            _b: &TreeNode<&'static str>,
        ) -> Ordering {
            Ordering::Equal
        }

        fn make_result(&self, node: &TreeNode<&'static str>, depth: usize) -> String {
            format!("{}{}", "-".repeat(depth), node.payload)
        }
    }

    fn with_children(
        id: NodeId,
        label: &'static str,
        children: Vec<TreeNode<&'static str>>,
    ) -> TreeNode<&'static str> {
        let mut node = TreeNode::from_record(id, None, label);
        node.children = children;
        node
    }

    #[test]
    fn emits_subtree_before_next_sibling() {
        let mut root = TreeNode::root("root");
        root.children = vec![
            with_children(
                1,
                "a",
                vec![with_children(2, "b", vec![with_children(3, "c", vec![])])],
            ),
            with_children(4, "d", vec![]),
        ];

        assert_eq!(flatten_tree(&Labels, &root), vec!["a", "-b", "--c", "d"]);
    }

    #[test]
    fn non_root_node_is_flattened_as_its_own_subtree() {
        let subtree = with_children(2, "b", vec![with_children(3, "c", vec![])]);
        assert_eq!(flatten_tree(&Labels, &subtree), vec!["b", "-c"]);
    }

    #[test]
    fn empty_forest_yields_nothing() {
        assert!(flatten_tree(&Labels, &TreeNode::root("root")).is_empty());
    }
}
