//! All-pairs shortest-path precomputation over the transit graph

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::graph::TransitGraph;

/// Best known way to reach a vertex from a fixed source
#[derive(Debug, Clone, Copy)]
struct RouteState {
    weight: f64,
    /// Last edge on the best path, `None` at the source itself
    prev_edge: Option<EdgeIndex>,
}

/// Result of a point-to-point query: total weight and the ordered edge ids
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeIndex>,
}

/// Shortest-path tables for every source vertex
///
/// Runs one traced Dijkstra pass per source over the finished graph and keeps
/// the resulting weight plus last-edge tables, so any number of point-to-point
/// queries can be answered without recomputation. The dense tables trade
/// O(V²) memory for query latency, which fits a bounded static transit
/// network queried many times per process lifetime.
#[derive(Debug, Clone)]
pub struct Router {
    tables: Vec<Vec<Option<RouteState>>>,
    /// Tail vertex of every edge, for backward path reconstruction
    edge_tails: Vec<NodeIndex>,
}

#[derive(Clone, Copy, PartialEq)]
struct QueueEntry {
    cost: f64,
    node: NodeIndex,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from the standard BinaryHeap order)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Router {
    /// Precomputes shortest paths from every vertex. Weights must be
    /// non-negative, which [`TransitGraph::add_edge`] enforces.
    pub fn new(graph: &TransitGraph) -> Self {
        let vertex_count = graph.vertex_count();
        let tables = graph
            .vertices()
            .map(|source| single_source(graph, source, vertex_count))
            .collect();

        let mut edge_tails = vec![NodeIndex::end(); graph.edge_count()];
        for (id, from, _, _) in graph.edges() {
            edge_tails[id.index()] = from;
        }

        Self { tables, edge_tails }
    }

    /// Minimum-weight path between two vertices.
    ///
    /// `None` when the target is unreachable; a query from a vertex to itself
    /// yields weight zero and no edges. On ties the first-discovered path is
    /// kept, which callers must not rely on beyond "some minimal path".
    pub fn build_route(&self, from: NodeIndex, to: NodeIndex) -> Option<RouteInfo> {
        let weight = self.tables.get(from.index())?.get(to.index())?.as_ref()?.weight;

        let mut edges = Vec::new();
        let mut current = to;
        while current != from {
            let state = self.tables[from.index()][current.index()]?;
            let edge = state.prev_edge?;
            edges.push(edge);
            current = self.edge_tails[edge.index()];
        }
        edges.reverse();

        Some(RouteInfo { weight, edges })
    }
}

fn single_source(
    graph: &TransitGraph,
    source: NodeIndex,
    vertex_count: usize,
) -> Vec<Option<RouteState>> {
    let mut best: Vec<Option<RouteState>> = vec![None; vertex_count];
    best[source.index()] = Some(RouteState {
        weight: 0.0,
        prev_edge: None,
    });

    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        cost: 0.0,
        node: source,
    });

    while let Some(QueueEntry { cost, node }) = heap.pop() {
        // Skip stale entries for which a better path is already known
        if best[node.index()].is_some_and(|state| cost > state.weight) {
            continue;
        }

        for (edge, target, weight) in graph.outgoing(node) {
            let next = cost + weight;
            let slot = &mut best[target.index()];
            // Strict improvement keeps the first-discovered path on ties
            if slot.is_none_or(|state| next < state.weight) {
                *slot = Some(RouteState {
                    weight: next,
                    prev_edge: Some(edge),
                });
                heap.push(QueueEntry { cost: next, node: target });
            }
        }
    }

    best
}
