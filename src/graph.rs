//! Directed weighted multigraph over a fixed vertex set

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Build-once, query-many routing graph
///
/// The vertex set is fixed at construction; edges are append-only and keep
/// their insertion-ordered ids, which the catalogue uses as keys for its
/// edge→(bus, span) bridge.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    graph: DiGraph<(), f64>,
}

impl TransitGraph {
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = DiGraph::with_capacity(count, 0);
        for _ in 0..count {
            graph.add_node(());
        }
        Self { graph }
    }

    /// Appends an edge and returns its stable id.
    ///
    /// # Panics
    ///
    /// Negative weights break the router's correctness and are rejected as a
    /// contract violation rather than handled at runtime.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: f64) -> EdgeIndex {
        assert!(weight >= 0.0, "negative edge weight: {weight}");
        self.graph.add_edge(from, to, weight)
    }

    /// Endpoints and weight of an edge
    pub fn edge(&self, id: EdgeIndex) -> Option<(NodeIndex, NodeIndex, f64)> {
        let (from, to) = self.graph.edge_endpoints(id)?;
        let weight = *self.graph.edge_weight(id)?;
        Some((from, to, weight))
    }

    /// Outgoing edges of a vertex as `(edge id, target, weight)`
    pub fn outgoing(
        &self,
        vertex: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex, f64)> + '_ {
        self.graph
            .edges_directed(vertex, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target(), *edge.weight()))
    }

    /// All edges as `(edge id, from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, NodeIndex, NodeIndex, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.id(), edge.source(), edge.target(), *edge.weight()))
    }

    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
