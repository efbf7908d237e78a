//! Alignment and distribution of a node selection.
//!
//! Both tools only touch the selected nodes and only along one axis. They
//! need a minimum selection (two nodes to align, three to distribute) and
//! return the input unchanged below it. Selected nodes without a position
//! take no part.

use std::collections::HashSet;

use log::debug;

use easel_core::{
    geometry::Point,
    graph::GraphNode,
    identifier::Id,
    options::{AlignMode, DistributeAxis},
};

/// Minimum number of positioned nodes [`align_nodes`] acts on.
pub const MIN_ALIGN_SELECTION: usize = 2;

/// Minimum number of positioned nodes [`distribute_nodes`] acts on.
pub const MIN_DISTRIBUTE_SELECTION: usize = 3;

/// Indices of the selected nodes that have a position, in input order.
fn selection(nodes: &[GraphNode], ids: &[Id]) -> Vec<(usize, Point)> {
    let ids: HashSet<Id> = ids.iter().copied().collect();
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| ids.contains(&node.id()))
        .filter_map(|(idx, node)| node.position().map(|position| (idx, position)))
        .collect()
}

fn coordinate(point: Point, horizontal: bool) -> f32 {
    if horizontal { point.x() } else { point.y() }
}

fn with_coordinate(point: Point, horizontal: bool, value: f32) -> Point {
    if horizontal {
        point.with_x(value)
    } else {
        point.with_y(value)
    }
}

/// Align the selected nodes to a shared edge or center line.
///
/// `left`/`top` use the smallest coordinate, `right`/`bottom` the largest and
/// `center`/`middle` the mean. Only the axis the mode names is changed.
///
/// # Examples
///
/// ```
/// # use easel::layout::align_nodes;
/// # use easel::{geometry::Point, graph::GraphNode, identifier::Id, options::AlignMode};
/// let nodes = vec![
///     GraphNode::new("doc_al_a", Point::new(10.0, 0.0)),
///     GraphNode::new("doc_al_b", Point::new(40.0, 50.0)),
/// ];
/// let ids = [Id::new("doc_al_a"), Id::new("doc_al_b")];
///
/// let aligned = align_nodes(&nodes, &ids, AlignMode::Left);
/// assert_eq!(aligned[1].position(), Some(Point::new(10.0, 50.0)));
/// ```
pub fn align_nodes(nodes: &[GraphNode], ids: &[Id], mode: AlignMode) -> Vec<GraphNode> {
    let selected = selection(nodes, ids);
    if selected.len() < MIN_ALIGN_SELECTION {
        debug!(selected = selected.len(); "Not enough nodes selected to align");
        return nodes.to_vec();
    }

    let horizontal = mode.is_horizontal();
    let values = selected
        .iter()
        .map(|(_, position)| coordinate(*position, horizontal));
    let target = match mode {
        AlignMode::Left | AlignMode::Top => values.fold(f32::INFINITY, f32::min),
        AlignMode::Right | AlignMode::Bottom => values.fold(f32::NEG_INFINITY, f32::max),
        AlignMode::Center | AlignMode::Middle => values.sum::<f32>() / selected.len() as f32,
    };
    debug!(mode:?, target, selected = selected.len(); "Aligning nodes");

    let mut result = nodes.to_vec();
    for (idx, position) in selected {
        result[idx] = result[idx]
            .clone()
            .with_position(with_coordinate(position, horizontal, target));
    }
    result
}

/// Spread the selected nodes evenly between the two outermost ones.
///
/// The selection is sorted by its coordinate on `axis` (ties keep input
/// order). The first and last nodes stay put; the node of rank `r` moves to
/// `first + r * (last - first) / (count - 1)`.
pub fn distribute_nodes(nodes: &[GraphNode], ids: &[Id], axis: DistributeAxis) -> Vec<GraphNode> {
    let mut selected = selection(nodes, ids);
    if selected.len() < MIN_DISTRIBUTE_SELECTION {
        debug!(selected = selected.len(); "Not enough nodes selected to distribute");
        return nodes.to_vec();
    }

    let horizontal = axis == DistributeAxis::Horizontal;
    selected.sort_by(|(_, a), (_, b)| {
        coordinate(*a, horizontal).total_cmp(&coordinate(*b, horizontal))
    });

    let last_rank = selected.len() - 1;
    let first = coordinate(selected[0].1, horizontal);
    let last = coordinate(selected[last_rank].1, horizontal);
    let step = (last - first) / last_rank as f32;
    debug!(axis:?, first, last, step; "Distributing nodes");

    let mut result = nodes.to_vec();
    for (rank, (idx, position)) in selected.into_iter().enumerate() {
        if rank == 0 || rank == last_rank {
            continue;
        }
        let value = first + rank as f32 * step;
        result[idx] = result[idx]
            .clone()
            .with_position(with_coordinate(position, horizontal, value));
    }
    result
}
