//! Layout operations over graph snapshots.
//!
//! Every function here is pure: it reads the snapshot it is given and
//! returns a new node list in input order. Nothing is retained between
//! calls, and none of them fails. Empty graphs, dangling edges and
//! undersized selections degrade to no-ops.
//!
//! The four layouts are thin wrappers over the engines in [`engines`]; the
//! alignment and distribution tools live in this module directly.

pub mod engines;

mod arrange;

pub use arrange::{MIN_ALIGN_SELECTION, MIN_DISTRIBUTE_SELECTION, align_nodes, distribute_nodes};

use easel_core::{
    graph::{Graph, GraphNode},
    options::LayoutOptions,
};

use engines::{CircularEngine, ForceEngine, GridEngine, HierarchicalEngine, LayoutEngine};

/// Layered layout by breadth-first depth. See [`HierarchicalEngine`].
pub fn hierarchical(graph: &Graph, options: &LayoutOptions) -> Vec<GraphNode> {
    HierarchicalEngine::new().calculate(graph, options)
}

/// Spring/repulsion relaxation. See [`ForceEngine`].
pub fn force_directed(graph: &Graph, options: &LayoutOptions) -> Vec<GraphNode> {
    ForceEngine::new().calculate(graph, options)
}

/// Square-ish grid in input order. Edges are ignored.
pub fn grid(nodes: &[GraphNode], options: &LayoutOptions) -> Vec<GraphNode> {
    GridEngine::new().calculate(&Graph::new(nodes.to_vec(), Vec::new()), options)
}

/// Evenly spaced circle in input order. Edges are ignored.
pub fn circular(nodes: &[GraphNode], options: &LayoutOptions) -> Vec<GraphNode> {
    CircularEngine::new().calculate(&Graph::new(nodes.to_vec(), Vec::new()), options)
}
