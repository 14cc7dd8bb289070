//! Domain types for the charging-station map.
//!
//! These types mirror the stations API's JSON payloads. They are created by
//! deserializing API responses and are never edited in place: every fetch
//! replaces them wholesale.

mod connector;
mod filter;
mod geo;
mod number;
mod station;
mod statistics;

pub use connector::{Connector, ConnectorType};
pub use filter::{FilterCriteria, InvalidPowerThreshold, PowerThreshold, apply_filters};
pub use geo::LatLng;
pub use station::{Station, StationDetail, StationId};
pub use statistics::Statistics;
