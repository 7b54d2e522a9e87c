//! Record-family capabilities for the tree engine.
//!
//! # Responsibility
//! - Bind concrete record types to the generic `TreeCapability` contract.
//! - Keep record-specific ordering and rendering out of the engine.

pub mod item_service;
