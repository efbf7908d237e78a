//! Circular layout engine
//!
//! Places nodes evenly on a circle centered at the origin, in input order,
//! starting at angle zero (the positive x axis). The radius is chosen so the
//! arc between neighbours is roughly the configured spacing. Edges are
//! ignored.

use std::f32::consts::TAU;

use log::debug;

use easel_core::{
    geometry::Point,
    graph::{Graph, GraphNode},
    options::LayoutOptions,
};

use crate::layout::engines::LayoutEngine;

/// The circular layout engine
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    /// Create a new circular layout engine
    pub fn new() -> Self {
        Self
    }

    /// Radius giving an arc length of `spacing` between `count` neighbours.
    pub fn radius(count: usize, spacing: f32) -> f32 {
        count as f32 * spacing / TAU
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, graph: &Graph, options: &LayoutOptions) -> Vec<GraphNode> {
        if graph.is_empty() {
            return Vec::new();
        }
        let nodes = graph.nodes();

        let options = options.sanitized();
        let count = nodes.len() as f32;
        let radius = Self::radius(nodes.len(), options.spacing());
        debug!(node_count = nodes.len(), radius; "Arranging nodes on a circle");

        nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let angle = index as f32 / count * TAU;
                let position = Point::from_polar(angle, radius);
                node.clone().with_position(position.snap(options.grid_size()))
            })
            .collect()
    }
}
