//! Graph snapshot types.
//!
//! The editor owns its nodes and edges. A layout call receives a [`Graph`]
//! snapshot and returns fresh [`GraphNode`] values; nothing here is shared
//! with or retained by the engines between calls.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

/// A positioned vertex of the diagram.
///
/// `position` is the top-left corner of the node. It is optional because a
/// freshly dropped node may not have been placed yet; layouts that need a
/// starting position seed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    measured: Option<Size>,
}

impl GraphNode {
    /// Creates a node at the given position.
    pub fn new(id: impl Into<Id>, position: Point) -> Self {
        Self {
            id: id.into(),
            position: Some(position),
            measured: None,
        }
    }

    /// Creates a node that has not been placed yet.
    pub fn unplaced(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            position: None,
            measured: None,
        }
    }

    /// Returns a copy of this node carrying the measured size.
    pub fn with_measured(mut self, size: Size) -> Self {
        self.measured = Some(size);
        self
    }

    /// Returns a copy of this node moved to `position`.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn measured(&self) -> Option<Size> {
        self.measured
    }

    /// Box covered by the node, or `None` when it has no position.
    ///
    /// Unmeasured nodes cover a zero-size box at their position.
    pub fn bounds(&self) -> Option<Bounds> {
        self.position
            .map(|position| Bounds::new_from_top_left(position, self.measured.unwrap_or_default()))
    }
}

/// A directed connection between two node ids.
///
/// Parallel edges and self-loops are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    id: Id,
    source: Id,
    target: Id,
}

impl GraphEdge {
    pub fn new(id: impl Into<Id>, source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }
}

/// A read-only snapshot of the diagram handed to a layout call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    nodes: Vec<GraphNode>,
    #[serde(default)]
    edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_bounds_uses_measured_size() {
        let node = GraphNode::new("a", Point::new(10.0, 20.0)).with_measured(Size::new(100.0, 40.0));
        let bounds = node.bounds().unwrap();

        assert_eq!(bounds.min_point(), Point::new(10.0, 20.0));
        assert_eq!(bounds.max_x(), 110.0);
        assert_eq!(bounds.max_y(), 60.0);
    }

    #[test]
    fn test_unplaced_node_has_no_bounds() {
        assert!(GraphNode::unplaced("a").bounds().is_none());
    }

    #[test]
    fn test_empty_graph() {
        assert!(Graph::default().is_empty());
        assert!(Graph::default().edges().is_empty());
    }

    #[test]
    fn test_graph_deserializes_editor_shape() {
        let json = r#"{
            "nodes": [
                {"id": "a", "position": {"x": 0, "y": 0}, "measured": {"width": 120, "height": 40}},
                {"id": "b"}
            ],
            "edges": [{"id": "e1", "source": "a", "target": "b"}]
        }"#;

        let graph: Graph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.nodes()[0].measured(), Some(Size::new(120.0, 40.0)));
        assert_eq!(graph.nodes()[1].position(), None);
        assert_eq!(graph.edges()[0].source(), "a");
        assert_eq!(graph.edges()[0].target(), "b");
    }
}
