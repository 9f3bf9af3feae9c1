//! Minimum-time route query.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{StationId, TimedRoute};
use crate::network::MetroNetwork;

/// A candidate route on the priority queue.
///
/// Ordered by accumulated minutes, then by the sequence number assigned at
/// push time. The sequence number exists only so that equal-distance entries
/// pop in insertion order without comparing stations or paths.
#[derive(Debug, Clone)]
struct QueueEntry {
    minutes: u32,
    seq: u64,
    station: StationId,
    path: Vec<StationId>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.minutes == other.minutes && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the ordering is reversed to pop the
        // smallest accumulated time first.
        other
            .minutes
            .cmp(&self.minutes)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the route with the minimum total travel time between two stations.
///
/// Dijkstra-style search: candidate routes are popped from a priority queue
/// in ascending order of accumulated minutes, and each station's distance is
/// finalized the first time a candidate for it survives the staleness check.
/// Connection times are non-negative by construction (`u32`), so the first
/// pop of the end station is optimal and returns immediately.
///
/// Returns `None` if either id is unknown or the end station is unreachable
/// from the start.
pub fn find_minimum_time(
    network: &MetroNetwork,
    start: &StationId,
    end: &StationId,
) -> Option<TimedRoute> {
    if !network.contains(start) || !network.contains(end) {
        debug!(%start, %end, "minimum-time query with unknown station id");
        return None;
    }

    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(QueueEntry {
        minutes: 0,
        seq,
        station: start.clone(),
        path: vec![start.clone()],
    });

    // Best confirmed total per station; entries that lose to it are stale.
    let mut finalized: HashMap<StationId, u32> = HashMap::new();

    while let Some(entry) = heap.pop() {
        if entry.station == *end {
            debug!(%start, %end, total = entry.minutes, "minimum-time route found");
            return Some(TimedRoute {
                stations: entry.path,
                total_minutes: entry.minutes,
            });
        }

        if let Some(&best) = finalized.get(&entry.station) {
            if best <= entry.minutes {
                continue;
            }
        }
        finalized.insert(entry.station.clone(), entry.minutes);

        let Some(station) = network.station(&entry.station) else {
            continue;
        };

        trace!(station = %entry.station, minutes = entry.minutes, "finalizing station");

        for (neighbor, minutes) in station.neighbors() {
            seq += 1;
            let mut extended = entry.path.clone();
            extended.push(neighbor.clone());
            heap.push(QueueEntry {
                minutes: entry.minutes + minutes,
                seq,
                station: neighbor.clone(),
                path: extended,
            });
        }
    }

    debug!(%start, %end, "no minimum-time route");
    None
}
