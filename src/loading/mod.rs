//! Assembly of the routing network from a finished catalogue

mod builder;

pub use builder::{RoutingConfig, build_transit_model};
