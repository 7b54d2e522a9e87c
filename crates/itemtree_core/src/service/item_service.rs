//! Directory item capability for the tree engine.
//!
//! # Responsibility
//! - Validate item collections before tree assembly.
//! - Map items to nodes, order siblings, and render result rows.
//!
//! # Invariants
//! - Input items are never mutated.
//! - Sibling order is total: ties keep input order.

use crate::model::item::{Item, ItemResult};
use crate::tree::{
    transform_items_with, validate_links, TransformOptions, TreeCapability, TreeNode,
    TreeResult,
};
use std::cmp::Ordering;

/// Sibling ordering for directory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemOrdering {
    /// Ascending `seq_id`.
    #[default]
    Sequence,
    /// Case-insensitive name, then `seq_id`.
    NameCaseInsensitive,
}

/// Tree capability for `Item` collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemService {
    ordering: ItemOrdering,
}

impl ItemService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(ordering: ItemOrdering) -> Self {
        Self { ordering }
    }

    pub fn ordering(&self) -> ItemOrdering {
        self.ordering
    }

    /// Transforms items into depth-annotated rows using `options`.
    pub fn transform(
        &self,
        items: &[Item],
        options: &TransformOptions,
    ) -> TreeResult<Vec<ItemResult>> {
        transform_items_with(self, items, options)
    }
}

impl TreeCapability for ItemService {
    type Record = Item;
    type Payload = Item;
    type Output = ItemResult;

    fn validate_collection(&self, records: &[Item]) -> TreeResult<()> {
        validate_links(records.iter().map(|item| (item.id, item.parent)))
    }

    fn make_root(&self) -> TreeNode<Item> {
        TreeNode::root(Item::root_placeholder())
    }

    fn collection_to_nodes(&self, records: &[Item]) -> Vec<TreeNode<Item>> {
        records
            .iter()
            .map(|item| TreeNode::from_record(item.id, item.parent, item.clone()))
            .collect()
    }

    fn compare_siblings(&self, a: &TreeNode<Item>, b: &TreeNode<Item>) -> Ordering {
        match self.ordering {
            ItemOrdering::Sequence => a.payload.seq_id.cmp(&b.payload.seq_id),
            ItemOrdering::NameCaseInsensitive => a
                .payload
                .name
                .to_lowercase()
                .cmp(&b.payload.name.to_lowercase())
                .then(a.payload.seq_id.cmp(&b.payload.seq_id)),
        }
    }

    fn make_result(&self, node: &TreeNode<Item>, depth: usize) -> ItemResult {
        ItemResult {
            id: node.payload.id,
            seq_id: node.payload.seq_id,
            name: node.payload.name.clone(),
            parent: node.record_parent(),
            depth,
        }
    }
}
