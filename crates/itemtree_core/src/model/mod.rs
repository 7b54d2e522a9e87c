//! Record types fed into and produced by the tree engine.
//!
//! # Responsibility
//! - Define the directory item shape and its rendered result.
//! - Keep wire field names stable for JSON callers (`seqId`).

pub mod item;
