//! Layout engine factory module
//!
//! This module provides the engines behind the editor's auto-layout buttons
//! and selects one from an [`Algorithm`].
//!
//! Engines are stateless. Each call receives a graph snapshot and returns
//! the new node list, in input order, with only positions changed.

mod circular;
mod force;
mod grid;
mod hierarchical;

pub use circular::Engine as CircularEngine;
pub use force::Engine as ForceEngine;
pub use grid::Engine as GridEngine;
pub use hierarchical::Engine as HierarchicalEngine;

use easel_core::{
    graph::{Graph, GraphNode},
    options::{Algorithm, LayoutOptions},
};

/// Trait defining the interface for layout engines
pub trait LayoutEngine {
    /// Calculate new node positions for `graph`.
    ///
    /// - `graph`: Snapshot of the nodes and edges to arrange
    /// - `options`: Direction, spacing, level alignment and grid size. Engines
    ///   sanitize the options before use, so any value is accepted.
    ///
    /// Returns every node of the snapshot in input order. An empty snapshot
    /// yields an empty list.
    fn calculate(&self, graph: &Graph, options: &LayoutOptions) -> Vec<GraphNode>;
}

/// Create the engine implementing `algorithm`.
pub fn engine(algorithm: Algorithm) -> Box<dyn LayoutEngine> {
    match algorithm {
        Algorithm::Hierarchical => Box::new(HierarchicalEngine::new()),
        Algorithm::ForceDirected => Box::new(ForceEngine::new()),
        Algorithm::Grid => Box::new(GridEngine::new()),
        Algorithm::Circular => Box::new(CircularEngine::new()),
    }
}

#[cfg(test)]
mod tests {
    use easel_core::graph::GraphEdge;

    use super::*;

    #[test]
    fn test_every_algorithm_returns_all_nodes() {
        let graph = Graph::new(
            vec![
                GraphNode::unplaced("f_a"),
                GraphNode::unplaced("f_b"),
                GraphNode::unplaced("f_c"),
            ],
            vec![GraphEdge::new("f_e", "f_a", "f_b")],
        );

        for algorithm in [
            Algorithm::Hierarchical,
            Algorithm::ForceDirected,
            Algorithm::Grid,
            Algorithm::Circular,
        ] {
            let nodes = engine(algorithm).calculate(&graph, &LayoutOptions::default());
            assert_eq!(nodes.len(), 3, "{algorithm}");
            for (node, original) in nodes.iter().zip(graph.nodes()) {
                assert_eq!(node.id(), original.id(), "{algorithm}");
            }
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use easel_core::graph::GraphEdge;
    use proptest::prelude::*;

    use super::*;

    const MAX_NODES: usize = 15;

    /// Unplaced nodes plus edges whose endpoints may fall outside the node
    /// list, so some of them dangle.
    fn graph_strategy() -> impl Strategy<Value = Graph> {
        (
            0..MAX_NODES,
            prop::collection::vec((0..MAX_NODES + 3, 0..MAX_NODES + 3), 0..30),
        )
            .prop_map(|(count, pairs)| {
                let name = |i: usize| format!("eng_pt_{i}");
                let nodes = (0..count)
                    .map(|i| GraphNode::unplaced(name(i).as_str()))
                    .collect();
                let edges = pairs
                    .iter()
                    .enumerate()
                    .map(|(i, (s, t))| {
                        GraphEdge::new(
                            format!("eng_pt_e{i}").as_str(),
                            name(*s).as_str(),
                            name(*t).as_str(),
                        )
                    })
                    .collect();
                Graph::new(nodes, edges)
            })
    }

    fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
        prop_oneof![
            Just(Algorithm::Hierarchical),
            Just(Algorithm::ForceDirected),
            Just(Algorithm::Grid),
            Just(Algorithm::Circular),
        ]
    }

    fn grid_strategy() -> impl Strategy<Value = f32> {
        prop_oneof![Just(5.0f32), Just(10.0f32), Just(20.0f32), Just(25.0f32), Just(50.0f32)]
    }

    /// Every placed node lands on the grid and the node order is kept.
    fn check_positions_on_grid(
        graph: &Graph,
        algorithm: Algorithm,
        options: &LayoutOptions,
    ) -> Result<(), TestCaseError> {
        let result = engine(algorithm).calculate(graph, options);

        prop_assert_eq!(result.len(), graph.nodes().len());
        for (node, original) in result.iter().zip(graph.nodes()) {
            prop_assert_eq!(node.id(), original.id());
            let Some(point) = node.position() else {
                // Only the hierarchical layout leaves unreached nodes alone.
                prop_assert_eq!(algorithm, Algorithm::Hierarchical);
                continue;
            };
            prop_assert_eq!(point.x() % options.grid_size(), 0.0);
            prop_assert_eq!(point.y() % options.grid_size(), 0.0);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn positions_on_grid(
            graph in graph_strategy(),
            algorithm in algorithm_strategy(),
            spacing in 10.0f32..300.0,
            grid in grid_strategy(),
        ) {
            let options = LayoutOptions::default().with_spacing(spacing).with_grid_size(grid);
            check_positions_on_grid(&graph, algorithm, &options)?;
        }
    }
}
