//! End-to-end tests over a full ingest → build → query cycle

use approx::assert_relative_eq;
use geo::{Distance, Haversine, Point};
use transit_catalogue::{
    Error, RouteLeg, RoutingConfig, TransitCatalogue, TransitModel, build_transit_model,
};

fn config() -> RoutingConfig {
    RoutingConfig {
        bus_wait_time: 6.0,
        bus_velocity: 40.0,
    }
}

/// A(0,0), B(0,0.001), 100 m of road, one round-trip bus [A, B, A].
fn two_stop_model() -> TransitModel {
    let mut catalogue = TransitCatalogue::new();
    let a = catalogue.add_stop("A", 0.0, 0.0).unwrap();
    let b = catalogue.add_stop("B", 0.0, 0.001).unwrap();
    catalogue.add_distance(a, b, 100).unwrap();
    catalogue.add_bus("7", &["A", "B", "A"], true).unwrap();
    build_transit_model(catalogue, config()).unwrap()
}

#[test]
fn round_trip_bus_stats() {
    let model = two_stop_model();
    let stats = model.bus_stats("7").unwrap();

    assert_eq!(stats.stop_count, 3);
    assert_eq!(stats.unique_stop_count, 2);
    // B → A has no declared distance and resolves through the fallback.
    assert_relative_eq!(stats.route_length, 200.0);

    let leg = Haversine.distance(Point::new(0.0, 0.0), Point::new(0.001, 0.0));
    assert_relative_eq!(stats.curvature.unwrap(), 200.0 / (2.0 * leg));
    assert!(stats.curvature.unwrap() >= 1.0);
}

#[test]
fn shortest_route_waits_then_rides() {
    let model = two_stop_model();
    let itinerary = model.shortest_route("A", "B").unwrap().unwrap();

    // 6 min wait + 100 m at 40 m/min.
    assert_relative_eq!(itinerary.total_time, 8.5);
    assert_eq!(itinerary.legs.len(), 2);

    match &itinerary.legs[0] {
        RouteLeg::Wait { stop_name, time } => {
            assert_eq!(stop_name, "A");
            assert_relative_eq!(*time, 6.0);
        }
        other => panic!("expected a wait leg, got {other:?}"),
    }
    match &itinerary.legs[1] {
        RouteLeg::Ride {
            bus,
            span_count,
            time,
        } => {
            assert_eq!(bus, "7");
            assert_eq!(*span_count, 1);
            assert_relative_eq!(*time, 2.5);
        }
        other => panic!("expected a ride leg, got {other:?}"),
    }
}

#[test]
fn wait_and_ride_edge_counts() {
    let mut catalogue = TransitCatalogue::new();
    let a = catalogue.add_stop("A", 55.0, 37.0).unwrap();
    let b = catalogue.add_stop("B", 55.0, 37.01).unwrap();
    let c = catalogue.add_stop("C", 55.0, 37.02).unwrap();
    catalogue.add_distance(a, b, 100).unwrap();
    catalogue.add_distance(b, c, 200).unwrap();
    catalogue.add_bus("11", &["A", "B", "C"], false).unwrap();
    let model = build_transit_model(catalogue, config()).unwrap();

    // 3 wait edges plus L·(L−1)/2 ride edges for the expanded trip
    // [A, B, C, B, A] of length 5.
    assert_eq!(model.graph.edge_count(), 3 + 10);
}

#[test]
fn direct_ride_beats_chained_rides() {
    let mut catalogue = TransitCatalogue::new();
    let a = catalogue.add_stop("A", 55.0, 37.0).unwrap();
    let b = catalogue.add_stop("B", 55.0, 37.01).unwrap();
    let c = catalogue.add_stop("C", 55.0, 37.02).unwrap();
    catalogue.add_distance(a, b, 100).unwrap();
    catalogue.add_distance(b, c, 200).unwrap();
    catalogue.add_bus("11", &["A", "B", "C"], false).unwrap();
    let model = build_transit_model(catalogue, config()).unwrap();

    // One wait plus the direct span-2 edge: chaining through B would cost an
    // extra 6-minute wait.
    let itinerary = model.shortest_route("A", "C").unwrap().unwrap();
    assert_relative_eq!(itinerary.total_time, 6.0 + 300.0 / 40.0);
    assert_eq!(itinerary.legs.len(), 2);
    match &itinerary.legs[1] {
        RouteLeg::Ride {
            bus,
            span_count,
            time,
        } => {
            assert_eq!(bus, "11");
            assert_eq!(*span_count, 2);
            assert_relative_eq!(*time, 7.5);
        }
        other => panic!("expected a ride leg, got {other:?}"),
    }
}

#[test]
fn self_route_is_degenerate() {
    let model = two_stop_model();
    let itinerary = model.shortest_route("A", "A").unwrap().unwrap();
    assert_relative_eq!(itinerary.total_time, 0.0);
    assert!(itinerary.legs.is_empty());
}

#[test]
fn disconnected_stop_has_no_route() {
    let mut catalogue = TransitCatalogue::new();
    let a = catalogue.add_stop("A", 0.0, 0.0).unwrap();
    let b = catalogue.add_stop("B", 0.0, 0.001).unwrap();
    catalogue.add_stop("Depot", 10.0, 10.0).unwrap();
    catalogue.add_distance(a, b, 100).unwrap();
    catalogue.add_bus("7", &["A", "B", "A"], true).unwrap();
    let model = build_transit_model(catalogue, config()).unwrap();

    assert_eq!(model.shortest_route("A", "Depot").unwrap(), None);
    // The isolated stop is known: no buses rather than an error.
    assert!(model.buses_for_stop("Depot").unwrap().is_empty());
}

#[test]
fn unknown_names_surface_as_not_found() {
    let model = two_stop_model();

    assert!(matches!(
        model.shortest_route("A", "Nowhere"),
        Err(Error::StopNotFound(_))
    ));
    assert!(matches!(
        model.buses_for_stop("Nowhere"),
        Err(Error::StopNotFound(_))
    ));
    assert!(matches!(
        model.bus_stats("ghost line"),
        Err(Error::BusNotFound(_))
    ));
}

#[test]
fn buses_for_stop_is_sorted_by_name() {
    let mut catalogue = TransitCatalogue::new();
    let a = catalogue.add_stop("Hub", 55.0, 37.0).unwrap();
    let b = catalogue.add_stop("East", 55.0, 37.01).unwrap();
    catalogue.add_distance(a, b, 500).unwrap();
    catalogue.add_bus("9", &["Hub", "East"], false).unwrap();
    catalogue.add_bus("14", &["East", "Hub"], false).unwrap();
    let model = build_transit_model(catalogue, config()).unwrap();

    assert_eq!(model.buses_for_stop("Hub").unwrap(), vec!["14", "9"]);
}

#[test]
fn invalid_config_is_rejected() {
    let catalogue = TransitCatalogue::new();
    let result = build_transit_model(
        catalogue,
        RoutingConfig {
            bus_wait_time: 6.0,
            bus_velocity: 0.0,
        },
    );
    assert!(matches!(result, Err(Error::InvalidData(_))));
}
