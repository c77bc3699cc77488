//! Data model for the transport network
//!
//! Contains the entity types, the catalogue that owns them and the finished
//! query-facing transit model.

pub mod catalogue;
pub mod transit_model;
pub mod types;

pub use catalogue::TransitCatalogue;
pub use transit_model::TransitModel;
pub use types::{Bus, BusId, BusStats, Stop, StopId};
