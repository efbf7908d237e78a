//! Force-directed layout engine
//!
//! This module implements a simplified spring/repulsion relaxation. Every
//! node pair repels with a force falling off with the squared distance and
//! every edge pulls its endpoints together like a spring of zero rest length.
//!
//! There is no velocity state: each iteration moves a node by its damped net
//! force. The result depends only on the input order and positions, so the
//! layout is deterministic.

use std::f32::consts::TAU;

use log::{debug, trace};

use easel_core::{
    geometry::Point,
    graph::{Graph, GraphNode},
    options::LayoutOptions,
};

use crate::{layout::engines::LayoutEngine, structure::GraphIndex};

/// Force layout engine
///
/// The simulation constants are fixed; only the grid size of
/// [`LayoutOptions`] affects the result.
#[derive(Debug)]
pub struct Engine {
    // Simulation parameters
    iterations: usize,
    spring_constant: f32,
    repulsion_constant: f32,
    damping_factor: f32,
    // Radius of the circle unplaced nodes are seeded on
    seed_radius: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new force layout engine
    pub fn new() -> Self {
        Self {
            iterations: 50,
            spring_constant: 0.01,
            repulsion_constant: 1000.0,
            damping_factor: 0.9,
            seed_radius: 200.0,
        }
    }

    /// Starting positions: the node's own position, or a slot on a circle
    /// around the origin for nodes that have none.
    fn initialize_positions(&self, nodes: &[GraphNode]) -> Vec<Point> {
        let count = nodes.len() as f32;
        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                node.position().unwrap_or_else(|| {
                    Point::from_polar(i as f32 / count * TAU, self.seed_radius)
                })
            })
            .collect()
    }

    /// Net force on every node for the current positions.
    fn forces(&self, index: &GraphIndex, positions: &[Point]) -> Vec<Point> {
        let mut forces = vec![Point::default(); positions.len()];

        // Repulsion between every unordered pair
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let delta = positions[j].sub_point(positions[i]);
                let distance = delta.hypot().max(1.0);
                let force = self.repulsion_constant / (distance * distance);
                let push = delta.scale(force / distance);

                forces[i] = forces[i].sub_point(push);
                forces[j] = forces[j].add_point(push);
            }
        }

        // Attraction along edges
        for edge in index.edges() {
            let source = edge.source().index();
            let target = edge.target().index();

            let delta = positions[target].sub_point(positions[source]);
            let distance = delta.hypot().max(1.0);
            let force = distance * self.spring_constant;
            let pull = delta.scale(force / distance);

            forces[source] = forces[source].add_point(pull);
            forces[target] = forces[target].sub_point(pull);
        }

        forces
    }

    /// Run the relaxation and return the final, unsnapped positions.
    fn run_force_simulation(&self, index: &GraphIndex, nodes: &[GraphNode]) -> Vec<Point> {
        let mut positions = self.initialize_positions(nodes);

        for iteration in 0..self.iterations {
            let forces = self.forces(index, &positions);
            for (position, force) in positions.iter_mut().zip(&forces) {
                *position = position.add_point(force.scale(self.damping_factor));
            }

            trace!(
                iteration,
                max_force = forces.iter().map(|force| force.hypot()).fold(0.0f32, f32::max);
                "Force iteration"
            );
        }

        positions
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, graph: &Graph, options: &LayoutOptions) -> Vec<GraphNode> {
        if graph.is_empty() {
            return Vec::new();
        }
        let nodes = graph.nodes();

        let options = options.sanitized();
        let index = GraphIndex::new(graph);

        debug!(
            node_count = nodes.len(),
            iterations = self.iterations;
            "Running force simulation"
        );
        let positions = self.run_force_simulation(&index, nodes);

        nodes
            .iter()
            .zip(positions)
            .map(|(node, position)| node.clone().with_position(position.snap(options.grid_size())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use easel_core::graph::GraphEdge;

    use super::*;

    fn fine_grid() -> LayoutOptions {
        LayoutOptions::default().with_grid_size(1.0)
    }

    fn position(nodes: &[GraphNode], idx: usize) -> Point {
        nodes[idx].position().unwrap()
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let result = Engine::new().calculate(&Graph::default(), &LayoutOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_unconnected_nodes_repel() {
        let graph = Graph::new(
            vec![
                GraphNode::new("f_rep_a", Point::new(0.0, 0.0)),
                GraphNode::new("f_rep_b", Point::new(100.0, 0.0)),
            ],
            Vec::new(),
        );
        let result = Engine::new().calculate(&graph, &fine_grid());

        assert!(position(&result, 0).x() < 0.0);
        assert!(position(&result, 1).x() > 100.0);
        assert_eq!(position(&result, 0).y(), 0.0);
        assert_eq!(position(&result, 1).y(), 0.0);
    }

    #[test]
    fn test_connected_nodes_attract() {
        let graph = Graph::new(
            vec![
                GraphNode::new("f_att_a", Point::new(0.0, 0.0)),
                GraphNode::new("f_att_b", Point::new(1000.0, 0.0)),
            ],
            vec![GraphEdge::new("f_att_e", "f_att_a", "f_att_b")],
        );
        let result = Engine::new().calculate(&graph, &fine_grid());

        let a = position(&result, 0);
        let b = position(&result, 1);
        let distance = b.sub_point(a).hypot();

        // Each step shrinks the gap by 1.8%, so 50 steps leave roughly 40%.
        assert!(distance > 300.0 && distance < 500.0, "distance {distance}");
        // The pull is symmetric, so the midpoint stays put.
        assert!((a.x() + b.x() - 1000.0).abs() <= 2.0);
    }

    #[test]
    fn test_single_unplaced_node_is_seeded_on_circle() {
        let graph = Graph::new(vec![GraphNode::unplaced("f_seed")], Vec::new());
        let result = Engine::new().calculate(&graph, &LayoutOptions::default());

        assert_eq!(result[0].position(), Some(Point::new(200.0, 0.0)));
    }

    #[test]
    fn test_unplaced_nodes_get_distinct_positions() {
        let graph = Graph::new(
            (0..4)
                .map(|i| GraphNode::unplaced(format!("f_un_{i}").as_str()))
                .collect(),
            Vec::new(),
        );
        let result = Engine::new().calculate(&graph, &LayoutOptions::default());

        let positions: Vec<_> = result.iter().map(|node| node.position().unwrap()).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_dangling_edges_do_not_pull() {
        let nodes = vec![
            GraphNode::new("f_dg_a", Point::new(0.0, 0.0)),
            GraphNode::new("f_dg_b", Point::new(300.0, 40.0)),
        ];
        let plain = Graph::new(nodes.clone(), Vec::new());
        let dangling = Graph::new(
            nodes,
            vec![
                GraphEdge::new("f_dg_e1", "f_dg_a", "f_dg_ghost"),
                GraphEdge::new("f_dg_e2", "f_dg_ghost", "f_dg_b"),
            ],
        );

        let engine = Engine::new();
        assert_eq!(
            engine.calculate(&plain, &fine_grid()),
            engine.calculate(&dangling, &fine_grid())
        );
    }

    #[test]
    fn test_deterministic_and_on_grid() {
        let graph = Graph::new(
            vec![
                GraphNode::new("f_det_a", Point::new(0.0, 0.0)),
                GraphNode::new("f_det_b", Point::new(50.0, 10.0)),
                GraphNode::unplaced("f_det_c"),
                GraphNode::new("f_det_d", Point::new(-30.0, 90.0)),
            ],
            vec![
                GraphEdge::new("f_det_e1", "f_det_a", "f_det_b"),
                GraphEdge::new("f_det_e2", "f_det_b", "f_det_c"),
                GraphEdge::new("f_det_e3", "f_det_c", "f_det_c"),
            ],
        );
        let options = LayoutOptions::default();

        let first = Engine::new().calculate(&graph, &options);
        let second = Engine::new().calculate(&graph, &options);
        assert_eq!(first, second);

        for node in &first {
            let point = node.position().unwrap();
            assert!(point.x().is_finite() && point.y().is_finite());
            assert_eq!(point.x() % 20.0, 0.0);
            assert_eq!(point.y() % 20.0, 0.0);
        }
    }

    #[test]
    fn test_coincident_nodes_stay_finite() {
        let graph = Graph::new(
            vec![
                GraphNode::new("f_co_a", Point::new(10.0, 10.0)),
                GraphNode::new("f_co_b", Point::new(10.0, 10.0)),
            ],
            vec![GraphEdge::new("f_co_e", "f_co_a", "f_co_b")],
        );
        let result = Engine::new().calculate(&graph, &fine_grid());

        for node in &result {
            let point = node.position().unwrap();
            assert!(point.x().is_finite() && point.y().is_finite());
        }
    }
}
