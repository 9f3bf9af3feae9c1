//! Domain types for the metro route planner.
//!
//! This module contains the core types that represent validated network
//! data. Identifiers enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod route;
mod station;

pub use route::{Route, TimedRoute};
pub use station::{InvalidStationId, StationId};
