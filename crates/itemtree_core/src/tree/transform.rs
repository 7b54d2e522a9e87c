//! Orchestration of validate, map, build, and flatten for one call.
//!
//! # Responsibility
//! - Sequence the engine stages for a full snapshot of records.
//! - Apply per-call options (unreachable policy, depth guard).
//!
//! # Invariants
//! - Validation errors abort before any node is created.
//! - Identical input and comparator always yield identical output order.
//! - No state is kept between calls.

use crate::tree::ancestry::find_cycle;
use crate::tree::build::build_tree;
use crate::tree::capability::TreeCapability;
use crate::tree::flatten::flatten_tree;
use crate::tree::node::NodeId;
use crate::tree::{TreeError, TreeResult};
use log::{error, info, warn};
use std::time::Instant;

/// What to do with records whose ancestry never reaches a top-level item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreachablePolicy {
    /// Drop them from the output and log a warning.
    #[default]
    Exclude,
    /// Fail the call with `TreeError::CycleDetected`.
    Reject,
}

/// Per-call engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub unreachable: UnreachablePolicy,
    /// Deepest allowed depth; top-level items have depth 0.
    pub max_depth: Option<usize>,
    /// Sort the top-level forest with the comparator too.
    ///
    /// Off by default: top-level items keep input order.
    pub sort_top_level: bool,
}

impl TransformOptions {
    /// Options that fail on cycles instead of dropping them.
    pub fn strict() -> Self {
        Self {
            unreachable: UnreachablePolicy::Reject,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_sorted_top_level(mut self) -> Self {
        self.sort_top_level = true;
        self
    }
}

/// Rendered rows plus the identifiers left out of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport<O> {
    pub results: Vec<O>,
    /// Records never reached from the root, in input order.
    pub excluded: Vec<NodeId>,
}

/// Transforms `records` with default options.
pub fn transform_items<C: TreeCapability>(
    capability: &C,
    records: &[C::Record],
) -> TreeResult<Vec<C::Output>> {
    transform_items_with(capability, records, &TransformOptions::default())
}

/// Transforms `records` with explicit options.
pub fn transform_items_with<C: TreeCapability>(
    capability: &C,
    records: &[C::Record],
    options: &TransformOptions,
) -> TreeResult<Vec<C::Output>> {
    transform_items_report(capability, records, options).map(|report| report.results)
}

/// Transforms `records` and reports which identifiers were excluded.
///
/// # Side effects
/// - Emits `tree_transform` logging events with counts, duration and status.
///
/// # Errors
/// - Any error from `validate_collection`.
/// - `CycleDetected` under `UnreachablePolicy::Reject`.
/// - `DepthLimitExceeded` when `max_depth` is exceeded.
pub fn transform_items_report<C: TreeCapability>(
    capability: &C,
    records: &[C::Record],
    options: &TransformOptions,
) -> TreeResult<TransformReport<C::Output>> {
    let started_at = Instant::now();
    info!(
        "event=tree_transform module=tree status=start records={}",
        records.len()
    );

    match run_stages(capability, records, options) {
        Ok(report) => {
            if !report.excluded.is_empty() {
                warn!(
                    "event=tree_transform module=tree status=partial excluded={} reason=unreachable",
                    report.excluded.len()
                );
            }
            info!(
                "event=tree_transform module=tree status=ok records={} results={} excluded={} duration_ms={}",
                records.len(),
                report.results.len(),
                report.excluded.len(),
                started_at.elapsed().as_millis()
            );
            Ok(report)
        }
        Err(err) => {
            error!(
                "event=tree_transform module=tree status=error records={} duration_ms={} error_code={} error={}",
                records.len(),
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

fn run_stages<C: TreeCapability>(
    capability: &C,
    records: &[C::Record],
    options: &TransformOptions,
) -> TreeResult<TransformReport<C::Output>> {
    capability.validate_collection(records)?;

    let nodes = capability.collection_to_nodes(records);
    let links: Vec<(NodeId, Option<NodeId>)> = match options.unreachable {
        UnreachablePolicy::Reject => nodes
            .iter()
            .map(|node| (node.id, node.record_parent()))
            .collect(),
        UnreachablePolicy::Exclude => Vec::new(),
    };

    let built = build_tree(capability, nodes, options.sort_top_level, options.max_depth)?;

    if options.unreachable == UnreachablePolicy::Reject {
        if let Some(first) = built.excluded.first().copied() {
            find_cycle(links.iter().copied())?;
            let parent_id = links
                .iter()
                .find(|(id, _)| *id == first)
                .and_then(|(_, parent)| *parent)
                .unwrap_or(first);
            return Err(TreeError::CycleDetected {
                node_id: first,
                parent_id,
            });
        }
    }

    let results = flatten_tree(capability, &built.root);
    Ok(TransformReport {
        results,
        excluded: built.excluded,
    })
}
