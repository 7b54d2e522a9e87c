//! Core logic for turning flat parent-pointer records into nested listings.
//! The `tree` engine is generic; `service` binds it to directory items.

pub mod logging;
pub mod model;
pub mod service;
pub mod tree;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{Item, ItemResult};
pub use service::item_service::{ItemOrdering, ItemService};
pub use tree::{
    build_tree, compute_depth_and_root, find_cycle, flatten_tree, transform_items,
    transform_items_report, transform_items_with, validate_links, AncestryInfo, BuiltTree,
    NodeId, TransformOptions, TransformReport, TreeCapability, TreeError, TreeNode, TreeResult,
    UnreachablePolicy, ROOT_ID,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
