//! Fetch gateway for the charging-stations REST API.
//!
//! Every endpoint answers with a `{success, data}` envelope except the
//! GeoJSON export, which returns the document directly. An unsuccessful
//! envelope is "no results", not an error.

mod api;
mod client;
mod envelope;
mod error;
mod export;
#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod client_tests;

pub use api::{DEFAULT_NEARBY_LIMIT, DEFAULT_NEARBY_RADIUS, NearbyQuery, StationApi};
pub use client::{DEFAULT_BASE_URL, GatewayClient, GatewayConfig};
pub use envelope::Envelope;
pub use error::GatewayError;
pub use export::{EXPORT_FILE_NAME, export_document};
