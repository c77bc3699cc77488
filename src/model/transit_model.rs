//! Query facade over the finished catalogue, graph and router

use crate::Error;
use crate::graph::TransitGraph;
use crate::loading::RoutingConfig;
use crate::model::{BusStats, TransitCatalogue};
use crate::routing::{Itinerary, Router, legs_from_edges};

/// Finished, immutable transit network
///
/// Built once by [`crate::loading::build_transit_model`]; every query is
/// read-only, so a model can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct TransitModel {
    pub catalogue: TransitCatalogue,
    pub graph: TransitGraph,
    pub(crate) router: Router,
    pub(crate) config: RoutingConfig,
}

impl TransitModel {
    /// Aggregate statistics for a bus
    pub fn bus_stats(&self, name: &str) -> Result<BusStats, Error> {
        let bus = self.catalogue.bus_by_name(name)?;
        Ok(BusStats {
            stop_count: bus.stops.len(),
            unique_stop_count: bus.unique_stops.len(),
            route_length: bus.true_distance(),
            curvature: bus.curvature(),
        })
    }

    /// Sorted names of the buses visiting a stop
    ///
    /// An isolated stop yields an empty list, which is distinct from the
    /// `StopNotFound` error for an unknown name.
    pub fn buses_for_stop(&self, name: &str) -> Result<Vec<&str>, Error> {
        let stop_id = self.catalogue.stop_id_by_name(name)?;
        let mut names: Vec<&str> = self
            .catalogue
            .buses_by_stop(stop_id)?
            .iter()
            .map(|&bus| self.catalogue.bus(bus).name.as_str())
            .collect();
        names.sort_unstable();
        Ok(names)
    }

    /// Minimum-time itinerary between two stops
    ///
    /// `Ok(None)` when the destination is unreachable. A route from a stop to
    /// itself is the degenerate zero-weight itinerary with no legs.
    pub fn shortest_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, Error> {
        let from_stop = self.catalogue.stop_by_name(from)?;
        let to_stop = self.catalogue.stop_by_name(to)?;
        if from_stop.in_vertex == to_stop.in_vertex {
            return Ok(Some(Itinerary::empty()));
        }

        let Some(route) = self.router.build_route(from_stop.in_vertex, to_stop.in_vertex) else {
            return Ok(None);
        };
        legs_from_edges(&self.catalogue, &self.graph, route.weight, &route.edges).map(Some)
    }

    /// Routing parameters the network was built with
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }
}
