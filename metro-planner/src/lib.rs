//! Metro route planner.
//!
//! Models a multi-line metro network as a weighted undirected graph and
//! answers two queries between stations: the route with the fewest
//! connections, and the route with the minimum total travel time.

pub mod domain;
pub mod istanbul;
pub mod network;
pub mod planner;
