//! Transport catalogue with a shortest-time itinerary router
//!
//! Models a public-transport network (named stops, bus trips, pairwise road
//! distances), derives a directed weighted routing graph from it (one wait
//! edge per stop, one ride edge per reachable stop pair of every bus) and
//! precomputes all-pairs shortest paths so repeated point-to-point queries
//! stay cheap.
//!
//! Lifecycle: fill a [`TransitCatalogue`] during ingestion, freeze it into a
//! [`TransitModel`] with [`build_transit_model`], then run queries — bus
//! statistics, buses per stop and shortest-time itineraries made of `Wait`
//! and `Ride` legs.

pub mod error;
pub mod graph;
pub mod loading;
pub mod model;
pub mod routing;

pub use error::Error;
pub use graph::TransitGraph;
pub use loading::{RoutingConfig, build_transit_model};
pub use model::{Bus, BusId, BusStats, Stop, StopId, TransitCatalogue, TransitModel};
pub use routing::{Itinerary, RouteInfo, RouteLeg, Router};
