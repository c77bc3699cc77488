//! Core entities of the transport network

use geo::Point;
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;
use serde::Serialize;

/// Stable arena index of a stop in the catalogue
pub type StopId = usize;

/// Stable arena index of a bus in the catalogue
pub type BusId = usize;

/// Named geographic point of the network
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: String,
    pub geometry: Point<f64>,
    /// Vertex modelling arrival at the stop
    pub in_vertex: NodeIndex,
    /// Vertex modelling departure after the boarding wait
    pub out_vertex: NodeIndex,
}

/// Named ordered trip over stops
///
/// `stops` holds the full trip: round trips arrive already closed, linear
/// trips have the homeward leg appended before insertion. The two distance
/// scalars are fixed when the bus enters the catalogue and never re-summed.
#[derive(Debug, Clone)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopId>,
    pub unique_stops: HashSet<StopId>,
    pub is_roundtrip: bool,
    /// First stop of the declared sequence
    pub first: StopId,
    /// Last stop of the declared sequence, before the homeward expansion
    pub last: StopId,
    pub(crate) true_dist: f64,
    pub(crate) geo_dist: f64,
}

impl Bus {
    /// Total road distance of the full trip in meters
    pub fn true_distance(&self) -> f64 {
        self.true_dist
    }

    /// Total great-circle distance of the full trip in meters
    pub fn geo_distance(&self) -> f64 {
        self.geo_dist
    }

    /// Road-to-straight-line length ratio
    ///
    /// `None` when the geographic length is zero (all stops coincide), so the
    /// degenerate case is explicit instead of a silent division by zero.
    pub fn curvature(&self) -> Option<f64> {
        if self.geo_dist == 0.0 {
            None
        } else {
            Some(self.true_dist / self.geo_dist)
        }
    }
}

/// Aggregate statistics for a single bus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road length of the full trip in meters
    pub route_length: f64,
    pub curvature: Option<f64>,
}
