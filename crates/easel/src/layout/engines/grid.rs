//! Grid layout engine
//!
//! Arranges nodes row by row in a square-ish grid, in input order. Edges are
//! ignored.

use log::debug;

use easel_core::{
    geometry::Point,
    graph::{Graph, GraphNode},
    options::LayoutOptions,
};

use crate::layout::engines::LayoutEngine;

/// The grid layout engine
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    /// Create a new grid layout engine
    pub fn new() -> Self {
        Self
    }

    /// Number of columns for `count` nodes: the ceiling of its square root.
    fn columns(count: usize) -> usize {
        (count as f64).sqrt().ceil() as usize
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, graph: &Graph, options: &LayoutOptions) -> Vec<GraphNode> {
        if graph.is_empty() {
            return Vec::new();
        }
        let nodes = graph.nodes();

        let options = options.sanitized();
        let columns = Self::columns(nodes.len());
        debug!(node_count = nodes.len(), columns; "Arranging nodes in a grid");

        nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let row = index / columns;
                let col = index % columns;
                let position = Point::new(
                    col as f32 * options.spacing(),
                    row as f32 * options.spacing(),
                );
                node.clone().with_position(position.snap(options.grid_size()))
            })
            .collect()
    }
}
