//! Route queries over a metro network.
//!
//! Two stateless queries, both reading an already-constructed network:
//! fewest hops (breadth-first search, ignoring times) and minimum total
//! travel time (priority-queue shortest path over non-negative times).

mod fastest;
mod hops;

pub use fastest::find_minimum_time;
pub use hops::find_fewest_hops;
