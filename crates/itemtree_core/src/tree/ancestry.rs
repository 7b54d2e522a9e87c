//! Ancestry walks for depth/root lookup and cycle diagnosis.
//!
//! # Invariants
//! - Walks are iterative and visit each node at most once per walk.
//! - A walk that revisits a node reports `CycleDetected` instead of looping.

use crate::tree::node::NodeId;
use crate::tree::{TreeError, TreeResult};
use std::collections::{HashMap, HashSet};

/// Position of one record relative to its top-level ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestryInfo {
    /// Parent edges between the record and its top-level ancestor.
    pub depth: usize,
    /// Identifier of the top-level ancestor (the record itself when top-level).
    pub root: NodeId,
}

/// Walks parent links from `id` up to a record without parent.
///
/// # Errors
/// - `CycleDetected` when the walk revisits a node.
/// - `DanglingParentReference` when a link names an unknown id.
pub fn compute_depth_and_root(
    id: NodeId,
    parents: &HashMap<NodeId, Option<NodeId>>,
) -> TreeResult<AncestryInfo> {
    let mut visited = HashSet::new();
    let mut current = id;
    let mut depth = 0;
    loop {
        let parent = *parents
            .get(&current)
            .ok_or(TreeError::DanglingParentReference(current))?;
        if !visited.insert(current) {
            return Err(TreeError::CycleDetected {
                node_id: current,
                parent_id: parent.unwrap_or(current),
            });
        }
        match parent {
            Some(next) => {
                current = next;
                depth += 1;
            }
            None => return Ok(AncestryInfo { depth, root: current }),
        }
    }
}

/// Checks every record's ancestry and reports the first cycle found.
///
/// Records are checked in input order.
pub fn find_cycle<I>(links: I) -> TreeResult<()>
where
    I: IntoIterator<Item = (NodeId, Option<NodeId>)>,
{
    let links: Vec<(NodeId, Option<NodeId>)> = links.into_iter().collect();
    let parents: HashMap<NodeId, Option<NodeId>> = links.iter().copied().collect();
    for (id, _) in &links {
        compute_depth_and_root(*id, &parents)?;
    }
    Ok(())
}
