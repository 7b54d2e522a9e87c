//! Structural validation for flat parent-pointer collections.

use crate::tree::node::{NodeId, ROOT_ID};
use crate::tree::{TreeError, TreeResult};
use std::collections::HashSet;

/// Validates `(id, parent)` links for a whole collection.
///
/// Checks run in this order, each over the full collection:
/// 1. identifiers are unique,
/// 2. every distinct non-null parent names an existing identifier,
/// 3. no identifier equals `ROOT_ID`.
///
/// # Errors
/// - `DuplicateIdentifier` with the first repeated id.
/// - `DanglingParentReference` with the first missing parent id.
/// - `ReservedIdentifierUsed` when any record uses `ROOT_ID`.
pub fn validate_links<I>(links: I) -> TreeResult<()>
where
    I: IntoIterator<Item = (NodeId, Option<NodeId>)>,
{
    let links: Vec<(NodeId, Option<NodeId>)> = links.into_iter().collect();

    let mut ids = HashSet::with_capacity(links.len());
    for (id, _) in &links {
        if !ids.insert(*id) {
            return Err(TreeError::DuplicateIdentifier(*id));
        }
    }

    let mut seen_parents = HashSet::new();
    for parent in links.iter().filter_map(|(_, parent)| *parent) {
        if !seen_parents.insert(parent) {
            continue;
        }
        if !ids.contains(&parent) {
            return Err(TreeError::DanglingParentReference(parent));
        }
    }

    if ids.contains(&ROOT_ID) {
        return Err(TreeError::ReservedIdentifierUsed);
    }

    Ok(())
}
