//! Easel Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Easel layout
//! engine and its front ends:
//!
//! - **Identifiers**: String-interned node and edge ids ([`identifier::Id`])
//! - **Geometry**: Points, sizes, bounds and grid snapping ([`geometry`] module)
//! - **Graph**: The node/edge snapshot handed to a layout call ([`graph`] module)
//! - **Options**: Layout configuration and tool selectors ([`options`] module)

pub mod geometry;
pub mod graph;
pub mod identifier;
pub mod options;
