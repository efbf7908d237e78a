//! Easel - Auto-layout for node/edge diagrams.
//!
//! Given a snapshot of a diagram, Easel computes new node positions with one
//! of four algorithms (hierarchical, force-directed, grid, circular) and
//! offers alignment and distribution tools for a selection of nodes. Every
//! result is snapped to the editor grid.

pub mod config;
pub mod layout;
pub mod viewport;

mod error;
mod structure;

pub use easel_core::{geometry, graph, identifier, options};

pub use error::EaselError;

use log::{debug, info, trace};

use easel_core::{
    graph::{Graph, GraphNode},
    identifier::Id,
    options::{AlignMode, Algorithm, DistributeAxis, LayoutOptions},
};

use config::AppConfig;
use viewport::{FitViewRequest, Viewport};

/// Builder for running layouts and arrangement tools with a shared
/// configuration.
///
/// # Examples
///
/// ```rust
/// use easel::{
///     LayoutBuilder,
///     config::AppConfig,
///     graph::{Graph, GraphEdge, GraphNode},
///     options::Algorithm,
/// };
///
/// let graph = Graph::new(
///     vec![GraphNode::unplaced("a"), GraphNode::unplaced("b")],
///     vec![GraphEdge::new("e1", "a", "b")],
/// );
///
/// let builder = LayoutBuilder::new(AppConfig::default());
/// let nodes = builder.apply(Algorithm::Hierarchical, &graph);
///
/// assert_eq!(nodes.len(), 2);
/// assert!(nodes.iter().all(|node| node.position().is_some()));
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Layout options taken from the configuration.
    pub fn options(&self) -> LayoutOptions {
        self.config.layout().options()
    }

    /// Run `algorithm` over `graph` with the configured options.
    ///
    /// Returns every node of the snapshot in input order with its new
    /// position. The snapshot itself is left untouched.
    pub fn apply(&self, algorithm: Algorithm, graph: &Graph) -> Vec<GraphNode> {
        let options = self.options();
        info!(
            algorithm:% = algorithm,
            node_count = graph.nodes().len(),
            edge_count = graph.edges().len();
            "Applying layout"
        );
        trace!(options:?; "Layout options");

        let nodes = layout::engines::engine(algorithm).calculate(graph, &options);

        debug!(node_count = nodes.len(); "Layout calculated");
        nodes
    }

    /// Run the configured default algorithm over `graph`.
    pub fn apply_default(&self, graph: &Graph) -> Vec<GraphNode> {
        self.apply(self.config.layout().algorithm(), graph)
    }

    /// Align the selected nodes. See [`layout::align_nodes`].
    pub fn align(&self, nodes: &[GraphNode], ids: &[Id], mode: AlignMode) -> Vec<GraphNode> {
        info!(mode:? = mode, selected = ids.len(); "Aligning nodes");
        layout::align_nodes(nodes, ids, mode)
    }

    /// Spread the selected nodes evenly. See [`layout::distribute_nodes`].
    pub fn distribute(
        &self,
        nodes: &[GraphNode],
        ids: &[Id],
        axis: DistributeAxis,
    ) -> Vec<GraphNode> {
        info!(axis:? = axis, selected = ids.len(); "Distributing nodes");
        layout::distribute_nodes(nodes, ids, axis)
    }

    /// Build the fit-view request for `nodes` using the viewport settings.
    pub fn fit_view_request(&self, nodes: &[GraphNode]) -> Option<FitViewRequest> {
        FitViewRequest::for_nodes(nodes, self.config.viewport())
    }

    /// Ask `viewport` to frame `nodes`.
    ///
    /// Call this after the positions returned by a layout have been applied.
    /// Returns `false` when no node has a position and nothing was sent.
    pub fn fit_view(&self, nodes: &[GraphNode], viewport: &mut impl Viewport) -> bool {
        match self.fit_view_request(nodes) {
            Some(request) => {
                viewport.fit_view(&request);
                true
            }
            None => {
                debug!("No positioned nodes, skipping fit view");
                false
            }
        }
    }
}
