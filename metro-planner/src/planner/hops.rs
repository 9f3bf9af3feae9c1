//! Fewest-hops route query.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{Route, StationId};
use crate::network::MetroNetwork;

/// Find a route with the fewest connections between two stations, ignoring
/// travel times.
///
/// Breadth-first search over the network: the frontier is a FIFO queue of
/// (station, path-so-far) pairs, so the first time the end station is
/// dequeued its path has minimum hop count. Among equal-hop routes the one
/// discovered first wins, and discovery follows adjacency order, which is
/// the order connections were added to the network.
///
/// Returns `None` if either id is unknown or the end station is unreachable
/// from the start; the two cases are deliberately not distinguished.
pub fn find_fewest_hops(
    network: &MetroNetwork,
    start: &StationId,
    end: &StationId,
) -> Option<Route> {
    if !network.contains(start) || !network.contains(end) {
        debug!(%start, %end, "fewest-hops query with unknown station id");
        return None;
    }

    let mut queue: VecDeque<(StationId, Vec<StationId>)> = VecDeque::new();
    queue.push_back((start.clone(), vec![start.clone()]));
    let mut visited: HashSet<StationId> = HashSet::new();

    while let Some((current, path)) = queue.pop_front() {
        if current == *end {
            debug!(%start, %end, hops = path.len() - 1, "fewest-hops route found");
            return Some(Route { stations: path });
        }

        visited.insert(current.clone());

        let Some(station) = network.station(&current) else {
            continue;
        };

        trace!(station = %current, frontier = queue.len(), "expanding station");

        for (neighbor, _) in station.neighbors() {
            if !visited.contains(neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                queue.push_back((neighbor.clone(), extended));
            }
        }
    }

    debug!(%start, %end, "no fewest-hops route");
    None
}
