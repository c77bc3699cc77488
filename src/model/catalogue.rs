//! Catalogue of stops, buses and road distances

use geo::{Distance, Haversine, Point};
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex};

use super::types::{Bus, BusId, Stop, StopId};
use crate::Error;

/// Owner of all network entities and their lookup indices
///
/// Stops and buses live in append-only arenas and are referenced by stable
/// indices everywhere else, so index structures survive arena growth. The
/// catalogue also carries the vertex→stop and edge→(bus, span) bridges the
/// routing layer needs to turn edge sequences back into itineraries.
#[derive(Debug, Clone, Default)]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_names: HashMap<String, StopId>,
    bus_names: HashMap<String, BusId>,
    /// Buses visiting each stop, parallel to `stops`
    stop_buses: Vec<HashSet<BusId>>,
    /// Directed road distances in meters
    distances: HashMap<(StopId, StopId), u32>,
    /// Graph vertex id to owning stop, two entries per stop
    vertex_stops: Vec<StopId>,
    /// Ride edge to the bus it belongs to and the hops it covers
    edge_spans: HashMap<EdgeIndex, (BusId, u32)>,
}

impl TransitCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stop and assigns its pair of graph vertices.
    ///
    /// Vertex ids grow monotonically with insertion order; only their
    /// uniqueness and stability are contractual.
    ///
    /// # Errors
    ///
    /// Duplicate names are rejected rather than silently overwritten.
    pub fn add_stop(&mut self, name: &str, lat: f64, lng: f64) -> Result<StopId, Error> {
        if self.stop_names.contains_key(name) {
            return Err(Error::DuplicateStop(name.to_owned()));
        }
        let id = self.stops.len();
        let in_vertex = NodeIndex::new(self.vertex_stops.len());
        let out_vertex = NodeIndex::new(self.vertex_stops.len() + 1);
        self.vertex_stops.push(id);
        self.vertex_stops.push(id);
        self.stops.push(Stop {
            name: name.to_owned(),
            geometry: Point::new(lng, lat),
            in_vertex,
            out_vertex,
        });
        self.stop_names.insert(name.to_owned(), id);
        self.stop_buses.push(HashSet::new());
        Ok(id)
    }

    /// Declares a directed road distance in meters.
    ///
    /// Overwrites an existing entry; distances may be declared speculatively
    /// for stops no bus visits yet.
    pub fn add_distance(&mut self, from: StopId, to: StopId, meters: u32) -> Result<(), Error> {
        self.check_stop(from)?;
        self.check_stop(to)?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Road distance between two stops, falling back to the reverse
    /// direction when only one was declared.
    pub fn road_distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Registers a bus from its declared stop names.
    ///
    /// For a non-round trip the homeward leg is appended before insertion;
    /// `first`/`last` keep the endpoints of the declared sequence.
    pub fn add_bus(
        &mut self,
        name: &str,
        stop_names: &[&str],
        is_roundtrip: bool,
    ) -> Result<BusId, Error> {
        let mut trip = stop_names
            .iter()
            .map(|stop_name| self.stop_id_by_name(stop_name))
            .collect::<Result<Vec<_>, _>>()?;
        let (&first, &last) = match (trip.first(), trip.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::DegenerateTrip(name.to_owned())),
        };
        if !is_roundtrip {
            for i in (0..trip.len() - 1).rev() {
                trip.push(trip[i]);
            }
        }
        self.add_bus_from_trip(name, trip, is_roundtrip, first, last)
    }

    /// Registers a bus from an already expanded trip.
    ///
    /// Derived state (unique stop set, road and great-circle lengths) is
    /// computed once here. A missing distance or foreign stop id aborts the
    /// bus entirely; no partial state is left behind.
    pub fn add_bus_from_trip(
        &mut self,
        name: &str,
        trip: Vec<StopId>,
        is_roundtrip: bool,
        first: StopId,
        last: StopId,
    ) -> Result<BusId, Error> {
        if self.bus_names.contains_key(name) {
            return Err(Error::DuplicateBus(name.to_owned()));
        }
        if trip.len() < 2 {
            return Err(Error::DegenerateTrip(name.to_owned()));
        }
        for &stop in trip.iter().chain([&first, &last]) {
            self.check_stop(stop)?;
        }

        let mut true_dist = 0.0;
        let mut geo_dist = 0.0;
        for (&from, &to) in trip.iter().tuple_windows() {
            let road = self.road_distance(from, to).ok_or_else(|| {
                Error::MissingDistance(self.stops[from].name.clone(), self.stops[to].name.clone())
            })?;
            true_dist += f64::from(road);
            geo_dist += Haversine.distance(self.stops[from].geometry, self.stops[to].geometry);
        }

        let unique_stops: HashSet<StopId> = trip.iter().copied().collect();
        let id = self.buses.len();
        for &stop in &unique_stops {
            self.stop_buses[stop].insert(id);
        }
        self.buses.push(Bus {
            name: name.to_owned(),
            stops: trip,
            unique_stops,
            is_roundtrip,
            first,
            last,
            true_dist,
            geo_dist,
        });
        self.bus_names.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn stop_id_by_name(&self, name: &str) -> Result<StopId, Error> {
        self.stop_names
            .get(name)
            .copied()
            .ok_or_else(|| Error::StopNotFound(name.to_owned()))
    }

    pub fn stop_by_name(&self, name: &str) -> Result<&Stop, Error> {
        Ok(&self.stops[self.stop_id_by_name(name)?])
    }

    pub fn bus_id_by_name(&self, name: &str) -> Result<BusId, Error> {
        self.bus_names
            .get(name)
            .copied()
            .ok_or_else(|| Error::BusNotFound(name.to_owned()))
    }

    pub fn bus_by_name(&self, name: &str) -> Result<&Bus, Error> {
        Ok(&self.buses[self.bus_id_by_name(name)?])
    }

    /// Buses visiting a stop; empty for a known but isolated stop.
    pub fn buses_by_stop(&self, stop: StopId) -> Result<&HashSet<BusId>, Error> {
        self.check_stop(stop)?;
        Ok(&self.stop_buses[stop])
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id]
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id]
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Number of graph vertices assigned so far (two per stop)
    pub fn vertex_count(&self) -> usize {
        self.vertex_stops.len()
    }

    /// Stop owning a graph vertex
    pub fn stop_by_vertex(&self, vertex: NodeIndex) -> Option<StopId> {
        self.vertex_stops.get(vertex.index()).copied()
    }

    /// Records which bus a ride edge belongs to and how many hops it covers.
    pub fn record_edge_span(&mut self, edge: EdgeIndex, bus: BusId, span: u32) {
        self.edge_spans.insert(edge, (bus, span));
    }

    /// Bus and span of a ride edge; `None` for wait edges.
    pub fn bus_and_span_by_edge(&self, edge: EdgeIndex) -> Option<(BusId, u32)> {
        self.edge_spans.get(&edge).copied()
    }

    fn check_stop(&self, id: StopId) -> Result<(), Error> {
        if id < self.stops.len() {
            Ok(())
        } else {
            Err(Error::UnresolvedStop(id))
        }
    }
}
