//! The metro network graph.
//!
//! Stations and their connections form an undirected weighted graph, built
//! incrementally by a loader and then treated as read-only for the lifetime
//! of all queries. Shared read-only access from multiple threads needs no
//! synchronization because nothing here has interior mutability.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::StationId;

/// A station in the network.
///
/// Identity (id, name, line) is fixed at creation; only the adjacency list
/// grows afterwards, as connections are added.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: String,
    line: String,
    neighbors: Vec<(StationId, u32)>,
}

impl Station {
    fn new(id: StationId, name: String, line: String) -> Self {
        Self {
            id,
            name,
            line,
            neighbors: Vec::new(),
        }
    }

    /// The station's unique id.
    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// The station's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line label the station belongs to.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Adjacent stations with connection times in minutes, in the order the
    /// connections were added. Parallel connections to the same neighbor are
    /// kept as separate entries.
    pub fn neighbors(&self) -> &[(StationId, u32)] {
        &self.neighbors
    }
}

/// An undirected weighted graph of metro stations.
///
/// Connections are symmetric: adding one inserts an adjacency entry on both
/// endpoints with the same time. Every adjacency entry references a station
/// present in the network; a connection naming an unknown station id is
/// dropped without error, so loaders must add stations before connecting
/// them.
#[derive(Debug, Clone, Default)]
pub struct MetroNetwork {
    stations: HashMap<StationId, Station>,
    lines: HashMap<String, Vec<StationId>>,
}

impl MetroNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station to the network.
    ///
    /// No-op if a station with this id already exists. The station is also
    /// recorded in its line's station group.
    pub fn add_station(
        &mut self,
        id: StationId,
        name: impl Into<String>,
        line: impl Into<String>,
    ) {
        if self.stations.contains_key(&id) {
            return;
        }

        let line = line.into();
        self.lines.entry(line.clone()).or_default().push(id.clone());
        self.stations
            .insert(id.clone(), Station::new(id, name.into(), line));
    }

    /// Add a bidirectional connection between two stations.
    ///
    /// Appends an adjacency entry with the given time to both stations. If
    /// either id does not name a known station, the call does nothing: the
    /// loader is lenient by contract, and callers that need to know whether
    /// a connection took effect must check station presence first.
    pub fn add_connection(&mut self, a: &StationId, b: &StationId, minutes: u32) {
        if !self.stations.contains_key(a) || !self.stations.contains_key(b) {
            debug!(%a, %b, minutes, "dropping connection referencing unknown station");
            return;
        }

        if let Some(station) = self.stations.get_mut(a) {
            station.neighbors.push((b.clone(), minutes));
        }
        if let Some(station) = self.stations.get_mut(b) {
            station.neighbors.push((a.clone(), minutes));
        }
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Whether a station with this id exists.
    pub fn contains(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// Station ids on the given line, in the order they were added.
    ///
    /// The grouping is informational; route queries never consult it.
    pub fn line(&self, label: &str) -> &[StationId] {
        self.lines.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All line labels present in the network.
    pub fn line_labels(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// True if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate over all stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }
}

/// Builder for loading a network from raw string keys.
///
/// Entries with unparsable ids are skipped, matching the network's lenient
/// loading policy.
#[derive(Debug, Default)]
pub struct MetroNetworkBuilder {
    inner: MetroNetwork,
}

impl MetroNetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, id: &str, name: &str, line: &str) -> Self {
        if let Ok(id) = StationId::parse(id) {
            self.inner.add_station(id, name, line);
        }
        self
    }

    /// Add a bidirectional connection.
    pub fn connection(mut self, a: &str, b: &str, minutes: u32) -> Self {
        if let (Ok(a), Ok(b)) = (StationId::parse(a), StationId::parse(b)) {
            self.inner.add_connection(&a, &b, minutes);
        }
        self
    }

    /// Build the network.
    pub fn build(self) -> MetroNetwork {
        self.inner
    }
}
