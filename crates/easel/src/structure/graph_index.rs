//! Adjacency index over a graph snapshot.
//!
//! The engines never walk the raw edge list. They build a [`GraphIndex`]
//! once per call, which resolves edge endpoints to node positions in the
//! input order and drops edges that reference unknown ids.
//!
//! # Architecture
//!
//! - [`NodeIndex`]: Position of a node in the snapshot's node list
//! - [`GraphIndex`]: Resolved edges plus incoming/outgoing adjacency
//!
//! Capabilities:
//! - Id lookup preserving input order via [`IndexMap`]
//! - Outgoing adjacency in edge order, for breadth-first traversal
//! - Root detection (nodes with no incoming edges)
//! - Iteration over resolved edges, for force accumulation

use indexmap::IndexMap;
use log::{debug, trace};

use easel_core::{graph::Graph, identifier::Id};

/// Position of a node in the snapshot's node list.
///
/// Indices are only meaningful for the [`GraphIndex`] that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position in the node list
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed edge whose endpoints both exist in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEdge {
    source: NodeIndex,
    target: NodeIndex,
}

impl ResolvedEdge {
    pub fn source(self) -> NodeIndex {
        self.source
    }

    pub fn target(self) -> NodeIndex {
        self.target
    }
}

/// Read-only adjacency view of a [`Graph`].
///
/// The graph is directed and keeps self-loops and parallel edges. Edges with
/// a dangling endpoint are discarded during construction, so every consumer
/// treats them as absent in the same way.
///
/// Node ids are expected to be unique. If they are not, lookups resolve to
/// the first node carrying the id, and later copies are never roots.
#[derive(Debug)]
pub struct GraphIndex {
    ids: IndexMap<Id, NodeIndex>,
    node_count: usize,
    edges: Vec<ResolvedEdge>,
    outgoing: Vec<Vec<NodeIndex>>,
    has_incoming: Vec<bool>,
    duplicate: Vec<bool>,
}

impl GraphIndex {
    /// Builds the index for `graph`.
    pub fn new(graph: &Graph) -> Self {
        let node_count = graph.nodes().len();
        let mut ids = IndexMap::with_capacity(node_count);
        let mut duplicate = vec![false; node_count];
        for (idx, node) in graph.nodes().iter().enumerate() {
            let first = *ids.entry(node.id()).or_insert(NodeIndex::new(idx));
            duplicate[idx] = first.index() != idx;
        }

        let mut index = Self {
            ids,
            node_count,
            edges: Vec::with_capacity(graph.edges().len()),
            outgoing: vec![Vec::new(); node_count],
            has_incoming: vec![false; node_count],
            duplicate,
        };

        for edge in graph.edges() {
            let (Some(source), Some(target)) = (index.node(edge.source()), index.node(edge.target()))
            else {
                trace!(
                    edge_id:% = edge.id(),
                    source:% = edge.source(),
                    target:% = edge.target();
                    "Ignoring edge with dangling endpoint"
                );
                continue;
            };

            index.edges.push(ResolvedEdge { source, target });
            index.outgoing[source.0].push(target);
            index.has_incoming[target.0] = true;
        }

        debug!(
            node_count,
            edge_count = index.edges.len(),
            dropped_edges = graph.edges().len() - index.edges.len();
            "Built graph index"
        );

        index
    }

    /// Returns the total number of nodes in the snapshot.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the index of the node with the given id, if it exists.
    pub fn node(&self, id: Id) -> Option<NodeIndex> {
        self.ids.get(&id).copied()
    }

    /// Returns an iterator over every node index in input order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.node_count).map(NodeIndex::new)
    }

    /// Returns an iterator over the resolved edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = ResolvedEdge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges),
    /// in input order.
    ///
    /// Only the first node carrying an id can be a root. Edges resolve to
    /// that node, so a later copy has no edges of its own.
    pub fn roots(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes()
            .filter(|node| !self.has_incoming[node.0] && !self.duplicate[node.0])
    }

    /// Returns the targets of the outgoing edges of `source`, in edge order.
    ///
    /// A target appears once per edge, so parallel edges repeat it.
    pub fn outgoing_nodes(&self, source: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.outgoing
            .get(source.0)
            .into_iter()
            .flatten()
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use easel_core::{
        geometry::Point,
        graph::{GraphEdge, GraphNode},
    };

    use super::*;

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::new(
            nodes
                .iter()
                .map(|id| GraphNode::new(*id, Point::default()))
                .collect(),
            edges
                .iter()
                .enumerate()
                .map(|(idx, (source, target))| {
                    GraphEdge::new(format!("e{idx}").as_str(), *source, *target)
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_graph() {
        let index = GraphIndex::new(&Graph::default());

        assert_eq!(index.node_count(), 0);
        assert_eq!(index.nodes().count(), 0);
        assert_eq!(index.edges().count(), 0);
        assert_eq!(index.roots().count(), 0);
    }

    #[test]
    fn test_node_lookup_by_id() {
        let index = GraphIndex::new(&graph(&["gi_a", "gi_b"], &[]));

        assert_eq!(index.node(Id::new("gi_a")), Some(NodeIndex::new(0)));
        assert_eq!(index.node(Id::new("gi_b")), Some(NodeIndex::new(1)));
        assert_eq!(index.node(Id::new("gi_missing")), None);
    }

    #[test]
    fn test_roots_in_input_order() {
        let index = GraphIndex::new(&graph(
            &["gi_r1", "gi_c", "gi_r2"],
            &[("gi_r1", "gi_c"), ("gi_r2", "gi_c")],
        ));

        let roots: Vec<_> = index.roots().collect();
        assert_eq!(roots, vec![NodeIndex::new(0), NodeIndex::new(2)]);
    }

    #[test]
    fn test_outgoing_nodes_keep_edge_order_and_duplicates() {
        let index = GraphIndex::new(&graph(
            &["gi_p", "gi_x", "gi_y"],
            &[("gi_p", "gi_y"), ("gi_p", "gi_x"), ("gi_p", "gi_y")],
        ));

        let children: Vec<_> = index.outgoing_nodes(NodeIndex::new(0)).collect();
        assert_eq!(
            children,
            vec![NodeIndex::new(2), NodeIndex::new(1), NodeIndex::new(2)]
        );
        assert_eq!(index.outgoing_nodes(NodeIndex::new(1)).count(), 0);
    }

    #[test]
    fn test_dangling_edges_are_dropped() {
        let index = GraphIndex::new(&graph(
            &["gi_d1", "gi_d2"],
            &[("gi_d1", "gi_ghost"), ("gi_ghost", "gi_d2"), ("gi_d1", "gi_d2")],
        ));

        assert_eq!(index.edges().count(), 1);
        // Only the edge between known nodes contributes adjacency.
        let children: Vec<_> = index.outgoing_nodes(NodeIndex::new(0)).collect();
        assert_eq!(children, vec![NodeIndex::new(1)]);
        assert_eq!(index.roots().collect::<Vec<_>>(), vec![NodeIndex::new(0)]);
    }

    #[test]
    fn test_dangling_source_does_not_hide_root() {
        let index = GraphIndex::new(&graph(&["gi_only"], &[("gi_nowhere", "gi_only")]));

        assert_eq!(index.roots().collect::<Vec<_>>(), vec![NodeIndex::new(0)]);
    }

    #[test]
    fn test_self_loop_is_incoming_edge() {
        let index = GraphIndex::new(&graph(&["gi_loop"], &[("gi_loop", "gi_loop")]));

        assert_eq!(index.roots().count(), 0);
        assert_eq!(index.edges().count(), 1);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let index = GraphIndex::new(&graph(&["gi_dup", "gi_dup"], &[]));

        assert_eq!(index.node_count(), 2);
        assert_eq!(index.node(Id::new("gi_dup")), Some(NodeIndex::new(0)));
        assert_eq!(index.roots().collect::<Vec<_>>(), vec![NodeIndex::new(0)]);
    }

    #[test]
    fn test_duplicate_of_edge_target_is_not_a_root() {
        let index = GraphIndex::new(&graph(
            &["gi_dt_p", "gi_dt_c", "gi_dt_c"],
            &[("gi_dt_p", "gi_dt_c")],
        ));

        assert_eq!(index.roots().collect::<Vec<_>>(), vec![NodeIndex::new(0)]);
        assert_eq!(
            index.outgoing_nodes(NodeIndex::new(0)).collect::<Vec<_>>(),
            vec![NodeIndex::new(1)]
        );
    }
}
