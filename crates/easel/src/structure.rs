//! Graph structures derived from a snapshot for the layout engines.

mod graph_index;

pub use graph_index::{GraphIndex, NodeIndex, ResolvedEdge};
