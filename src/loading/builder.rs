use log::info;

use crate::Error;
use crate::graph::TransitGraph;
use crate::model::{TransitCatalogue, TransitModel};
use crate::routing::Router;

/// Parameters applied to edge weights at network-construction time
///
/// Changing either value requires rebuilding the graph and router.
#[derive(Debug, Clone, Copy)]
pub struct RoutingConfig {
    /// Fixed boarding wait at every stop, in minutes
    pub bus_wait_time: f64,
    /// Bus velocity in meters per minute
    pub bus_velocity: f64,
}

/// Derives the routing graph from the catalogue and precomputes the router.
///
/// Emits one wait edge per stop (`in_vertex → out_vertex`) and, for every
/// bus, one ride edge per ordered stop pair of its trip. The dense per-bus
/// edge set lets a rider board and alight at any two stops of one trip
/// directly; intermediate wait edges are never traversed mid-ride.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or a consecutive stop
/// pair of some bus has no road distance in either direction.
pub fn build_transit_model(
    mut catalogue: TransitCatalogue,
    config: RoutingConfig,
) -> Result<TransitModel, Error> {
    validate_config(&config)?;

    let mut graph = TransitGraph::with_vertices(catalogue.vertex_count());

    for stop in catalogue.stops() {
        graph.add_edge(stop.in_vertex, stop.out_vertex, config.bus_wait_time);
    }

    for bus_id in 0..catalogue.buses().len() {
        let trip = catalogue.bus(bus_id).stops.clone();
        for (i, &board) in trip.iter().enumerate() {
            let mut total_dist = 0u32;
            for (j, &alight) in trip.iter().enumerate().skip(i + 1) {
                let hop = catalogue.road_distance(trip[j - 1], alight).ok_or_else(|| {
                    Error::MissingDistance(
                        catalogue.stop(trip[j - 1]).name.clone(),
                        catalogue.stop(alight).name.clone(),
                    )
                })?;
                total_dist += hop;
                let edge = graph.add_edge(
                    catalogue.stop(board).out_vertex,
                    catalogue.stop(alight).in_vertex,
                    f64::from(total_dist) / config.bus_velocity,
                );
                catalogue.record_edge_span(edge, bus_id, (j - i) as u32);
            }
        }
    }

    info!(
        "Built routing graph: {} vertices and {} edges for {} stops, {} buses",
        graph.vertex_count(),
        graph.edge_count(),
        catalogue.stops().len(),
        catalogue.buses().len()
    );

    let router = Router::new(&graph);
    info!(
        "Shortest-path tables precomputed for {} vertices",
        graph.vertex_count()
    );

    Ok(TransitModel {
        catalogue,
        graph,
        router,
        config,
    })
}

fn validate_config(config: &RoutingConfig) -> Result<(), Error> {
    if !config.bus_wait_time.is_finite() || config.bus_wait_time < 0.0 {
        return Err(Error::InvalidData(format!(
            "bus wait time must be non-negative, got {}",
            config.bus_wait_time
        )));
    }
    if !config.bus_velocity.is_finite() || config.bus_velocity <= 0.0 {
        return Err(Error::InvalidData(format!(
            "bus velocity must be positive, got {}",
            config.bus_velocity
        )));
    }
    Ok(())
}
