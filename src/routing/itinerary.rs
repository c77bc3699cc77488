//! Translation of router edge sequences into rider-facing itineraries

use petgraph::graph::EdgeIndex;
use serde::Serialize;

use crate::Error;
use crate::graph::TransitGraph;
use crate::model::TransitCatalogue;

/// One step of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteLeg {
    /// Boarding delay at a stop
    Wait { stop_name: String, time: f64 },
    /// In-vehicle travel covering `span_count` consecutive hops of one bus
    Ride {
        bus: String,
        span_count: u32,
        time: f64,
    },
}

/// Shortest-time itinerary between two stops
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub total_time: f64,
    pub legs: Vec<RouteLeg>,
}

impl Itinerary {
    /// Degenerate itinerary for a route from a stop to itself
    pub(crate) fn empty() -> Self {
        Self {
            total_time: 0.0,
            legs: Vec::new(),
        }
    }
}

/// Maps every edge of a route to a leg: an edge whose endpoints belong to one
/// stop is that stop's wait edge, anything else is a ride resolved through
/// the catalogue's edge→(bus, span) bridge.
pub(crate) fn legs_from_edges(
    catalogue: &TransitCatalogue,
    graph: &TransitGraph,
    total_time: f64,
    edges: &[EdgeIndex],
) -> Result<Itinerary, Error> {
    let mut legs = Vec::with_capacity(edges.len());
    for &edge_id in edges {
        let (from, to, weight) = graph
            .edge(edge_id)
            .ok_or_else(|| Error::InvalidData(format!("unknown edge {}", edge_id.index())))?;
        let from_stop = catalogue
            .stop_by_vertex(from)
            .ok_or_else(|| Error::InvalidData(format!("vertex {} has no stop", from.index())))?;
        let to_stop = catalogue
            .stop_by_vertex(to)
            .ok_or_else(|| Error::InvalidData(format!("vertex {} has no stop", to.index())))?;

        if from_stop == to_stop {
            legs.push(RouteLeg::Wait {
                stop_name: catalogue.stop(from_stop).name.clone(),
                time: weight,
            });
        } else {
            let (bus, span_count) = catalogue.bus_and_span_by_edge(edge_id).ok_or_else(|| {
                Error::InvalidData(format!("edge {} has no bus record", edge_id.index()))
            })?;
            legs.push(RouteLeg::Ride {
                bus: catalogue.bus(bus).name.clone(),
                span_count,
                time: weight,
            });
        }
    }

    Ok(Itinerary { total_time, legs })
}
