//! Hierarchy assembly from flat nodes.
//!
//! # Invariants
//! - Children are discovered by matching `parent == current.id`, downward only.
//! - Nodes whose ancestry never reaches the root are never visited; they are
//!   reported in `BuiltTree::excluded` instead of looping.
//! - Sibling groups below the root are sorted with the capability comparator.

use crate::tree::capability::TreeCapability;
use crate::tree::node::{NodeId, TreeNode, ROOT_ID};
use crate::tree::{TreeError, TreeResult};
use std::collections::{HashMap, HashSet};

/// Assembled tree plus the identifiers the builder could not reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTree<P> {
    /// Synthetic root owning the top-level forest.
    pub root: TreeNode<P>,
    /// Unreachable node ids, in input order.
    pub excluded: Vec<NodeId>,
}

/// Builds the hierarchy under a fresh synthetic root.
///
/// Nodes are bucketed by parent id once, then each bucket is handed to its
/// owner exactly once while descending from the root.
///
/// # Errors
/// - `DepthLimitExceeded` when `max_depth` is set and a reachable node sits
///   deeper than it (top-level nodes have depth 0).
pub fn build_tree<C: TreeCapability>(
    capability: &C,
    nodes: Vec<TreeNode<C::Payload>>,
    sort_top_level: bool,
    max_depth: Option<usize>,
) -> TreeResult<BuiltTree<C::Payload>> {
    let mut input_order = Vec::with_capacity(nodes.len());
    let mut by_parent: HashMap<NodeId, Vec<TreeNode<C::Payload>>> = HashMap::new();
    for node in nodes {
        input_order.push(node.id);
        by_parent
            .entry(node.parent.unwrap_or(ROOT_ID))
            .or_default()
            .push(node);
    }

    let mut root = capability.make_root();
    let mut top_level = by_parent.remove(&root.id).unwrap_or_default();
    if sort_top_level {
        top_level.sort_by(|a, b| capability.compare_siblings(a, b));
    }

    let mut forest = Vec::with_capacity(top_level.len());
    for node in top_level {
        forest.push(assemble(capability, node, &mut by_parent, 0, max_depth)?);
    }
    root.children = forest;

    let leftover: HashSet<NodeId> = by_parent
        .values()
        .flat_map(|group| group.iter().map(|node| node.id))
        .collect();
    let excluded = input_order
        .into_iter()
        .filter(|id| leftover.contains(id))
        .collect();

    Ok(BuiltTree { root, excluded })
}

fn assemble<C: TreeCapability>(
    capability: &C,
    mut node: TreeNode<C::Payload>,
    by_parent: &mut HashMap<NodeId, Vec<TreeNode<C::Payload>>>,
    depth: usize,
    max_depth: Option<usize>,
) -> TreeResult<TreeNode<C::Payload>> {
    if let Some(limit) = max_depth {
        if depth > limit {
            return Err(TreeError::DepthLimitExceeded {
                node_id: node.id,
                limit,
            });
        }
    }

    let Some(mut group) = by_parent.remove(&node.id) else {
        return Ok(node);
    };
    group.sort_by(|a, b| capability.compare_siblings(a, b));

    let mut children = Vec::with_capacity(group.len());
    for child in group {
        children.push(assemble(capability, child, by_parent, depth + 1, max_depth)?);
    }
    node.children = children;
    Ok(node)
}
