//! JSON diagram documents.
//!
//! A document is the node/edge export of the editor. Only the fields the
//! layout engine needs are typed; everything else (node data, styling,
//! handles, viewport state, ...) is kept verbatim in `extra` maps and written
//! back unchanged.
//!
//! Coordinates are kept as the JSON numbers they were read as. A coordinate
//! is only rewritten when an operation moved it, so nodes an operation did
//! not touch come back byte for byte.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use easel::{
    EaselError,
    geometry::{Point, Size},
    graph::{Graph, GraphEdge, GraphNode},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentPosition {
    x: Number,
    y: Number,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl DocumentPosition {
    fn point(&self) -> Point {
        Point::new(coordinate(&self.x), coordinate(&self.y))
    }

    /// Overwrite the axes where `point` differs from the stored value.
    fn update(&mut self, point: Point) {
        let current = self.point();
        if point.x() != current.x() {
            if let Some(x) = Number::from_f64(f64::from(point.x())) {
                self.x = x;
            }
        }
        if point.y() != current.y() {
            if let Some(y) = Number::from_f64(f64::from(point.y())) {
                self.y = y;
            }
        }
    }
}

impl From<Point> for DocumentPosition {
    fn from(point: Point) -> Self {
        let number = |value: f32| Number::from_f64(f64::from(value)).unwrap_or_else(|| 0.into());
        Self {
            x: number(point.x()),
            y: number(point.y()),
            extra: Map::new(),
        }
    }
}

fn coordinate(number: &Number) -> f32 {
    number.as_f64().unwrap_or_default() as f32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentNode {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<DocumentPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    measured: Option<Size>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentEdge {
    id: String,
    source: String,
    target: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// A diagram document as read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    nodes: Vec<DocumentNode>,
    #[serde(default)]
    edges: Vec<DocumentEdge>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Document {
    /// Parse a document from JSON source.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Document`] with the location reported by the
    /// decoder when `source` is not a valid document.
    pub fn parse(source: &str) -> Result<Self, EaselError> {
        serde_json::from_str(source).map_err(|err| {
            EaselError::new_document_error(err.to_string(), err.line(), err.column(), source)
        })
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, EaselError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| EaselError::new_document_error(err.to_string(), 0, 0, String::new()))
    }

    /// Snapshot of the nodes and edges for a layout call.
    pub fn graph(&self) -> Graph {
        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let graph_node = match &node.position {
                    Some(position) => GraphNode::new(node.id.as_str(), position.point()),
                    None => GraphNode::unplaced(node.id.as_str()),
                };
                match node.measured {
                    Some(size) => graph_node.with_measured(size),
                    None => graph_node,
                }
            })
            .collect();
        let edges = self
            .edges
            .iter()
            .map(|edge| {
                GraphEdge::new(
                    edge.id.as_str(),
                    edge.source.as_str(),
                    edge.target.as_str(),
                )
            })
            .collect();
        Graph::new(nodes, edges)
    }

    /// Copy the positions of `nodes` back into the document.
    ///
    /// `nodes` must be in document order, as every layout and arrangement
    /// call returns them. Coordinates equal to the ones read from the
    /// document keep their original text.
    pub fn apply_positions(&mut self, nodes: &[GraphNode]) {
        for (node, laid_out) in self.nodes.iter_mut().zip(nodes) {
            let Some(point) = laid_out.position() else {
                continue;
            };
            match &mut node.position {
                Some(position) => position.update(point),
                None => node.position = Some(point.into()),
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
