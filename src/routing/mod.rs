//! Shortest-route computation over the transit graph

pub mod itinerary;
pub mod router;

pub(crate) use itinerary::legs_from_edges;
pub use itinerary::{Itinerary, RouteLeg};
pub use router::{RouteInfo, Router};
