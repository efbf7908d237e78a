//! Viewport reframing after a layout.
//!
//! Layouts only compute positions. Once the caller has applied them, it asks
//! its view to fit the new bounds by building a [`FitViewRequest`] and
//! handing it to a [`Viewport`]. The request carries the timing the editor
//! uses: a short delay so the new positions are rendered first, then an
//! animated transition.

use std::time::Duration;

use log::debug;

use easel_core::{geometry::Bounds, graph::GraphNode};

use crate::config::ViewportConfig;

/// A request to reframe the visible area around a set of nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitViewRequest {
    bounds: Bounds,
    padding: f32,
    duration: Duration,
    delay: Duration,
}

impl FitViewRequest {
    /// Build a request covering every positioned node.
    ///
    /// Returns `None` when no node has a position, as there is nothing to
    /// frame.
    pub fn for_nodes(nodes: &[GraphNode], config: &ViewportConfig) -> Option<Self> {
        let bounds = nodes
            .iter()
            .filter_map(GraphNode::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))?;

        debug!(
            min_x = bounds.min_x(),
            min_y = bounds.min_y(),
            width = bounds.width(),
            height = bounds.height();
            "Prepared fit view request"
        );

        Some(Self {
            bounds,
            padding: config.padding(),
            duration: config.duration(),
            delay: config.delay(),
        })
    }

    /// Area that must be visible after the transition
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Extra margin around the bounds, as a fraction of their size
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Length of the animated transition
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time to wait before starting, so new positions are applied first
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// A view that can be reframed.
///
/// Implemented by whatever renders the diagram. The request is fire and
/// forget: the positions returned by the layout are already final.
pub trait Viewport {
    fn fit_view(&mut self, request: &FitViewRequest);
}
