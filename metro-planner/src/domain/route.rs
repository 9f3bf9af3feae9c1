//! Route query result types.

use serde::Serialize;

use super::StationId;

/// A route through the network: the ordered station ids from start to end,
/// both inclusive.
///
/// A route always contains at least one station; a query from a station to
/// itself yields the singleton route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Stations visited, in travel order.
    pub stations: Vec<StationId>,
}

impl Route {
    /// Number of connections traversed (one fewer than stations visited).
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// A route together with its total travel time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedRoute {
    /// Stations visited, in travel order.
    pub stations: Vec<StationId>,

    /// Sum of connection times along the route, in minutes.
    pub total_minutes: u32,
}
