//! Hierarchical layout engine
//!
//! Places nodes in bands ("levels") by breadth-first depth from the roots of
//! the graph.
//!
//! Levels are assigned by a single multi-source BFS. A node takes the level
//! of the first queue entry that reaches it and is never releveled by a later
//! path. Nodes that no root reaches keep their position.

use std::collections::VecDeque;

use log::{debug, trace};

use easel_core::{
    geometry::Point,
    graph::{Graph, GraphNode},
    options::LayoutOptions,
};

use crate::{
    layout::engines::LayoutEngine,
    structure::{GraphIndex, NodeIndex},
};

/// The hierarchical layout engine
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    /// Create a new hierarchical layout engine
    pub fn new() -> Self {
        Self
    }

    /// Assign BFS levels starting from every root at once.
    ///
    /// Returns the levels in depth order, each listing its nodes in the order
    /// they were dequeued.
    fn levels(&self, index: &GraphIndex) -> Vec<Vec<NodeIndex>> {
        let mut roots: Vec<NodeIndex> = index.roots().collect();
        if roots.is_empty() {
            // Every node has a parent; start from the first one so cycles
            // still get laid out.
            roots.extend(index.nodes().next());
            debug!("No root nodes found, using the first node as root");
        }

        let mut leveled = vec![false; index.node_count()];
        let mut levels: Vec<Vec<NodeIndex>> = Vec::new();
        let mut queue: VecDeque<(NodeIndex, usize)> =
            roots.into_iter().map(|root| (root, 0)).collect();

        while let Some((node, level)) = queue.pop_front() {
            if leveled[node.index()] {
                continue;
            }
            leveled[node.index()] = true;

            if levels.len() <= level {
                levels.resize_with(level + 1, Vec::new);
            }
            levels[level].push(node);

            for child in index.outgoing_nodes(node) {
                if !leveled[child.index()] {
                    queue.push_back((child, level + 1));
                }
            }
        }

        levels
    }

    /// Position of the node at `slot` in a level of `len` nodes at `depth`.
    fn position(&self, depth: usize, slot: usize, len: usize, options: &LayoutOptions) -> Point {
        let direction = options.direction();
        let depth = direction.depth_sign() * depth as f32 * options.spacing();
        let width = options.alignment().slot_offset(slot, len) * options.spacing();

        let point = if direction.is_vertical() {
            Point::new(width, depth)
        } else {
            Point::new(depth, width)
        };
        point.snap(options.grid_size())
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, graph: &Graph, options: &LayoutOptions) -> Vec<GraphNode> {
        if graph.is_empty() {
            return Vec::new();
        }
        let mut nodes = graph.nodes().to_vec();

        let options = options.sanitized();
        let index = GraphIndex::new(graph);
        let levels = self.levels(&index);

        debug!(
            level_count = levels.len(),
            direction:% = options.direction();
            "Calculated hierarchy levels"
        );

        for (depth, level) in levels.iter().enumerate() {
            trace!(depth, size = level.len(); "Placing level");
            for (slot, node) in level.iter().enumerate() {
                let position = self.position(depth, slot, level.len(), &options);
                let target = &mut nodes[node.index()];
                *target = target.clone().with_position(position);
            }
        }

        nodes
    }
}
