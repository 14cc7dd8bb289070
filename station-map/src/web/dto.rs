//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FilterCriteria, LatLng, PowerThreshold};
use crate::session::GeolocationOutcome;

/// Free-text search from the search box.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// A point on the map, as sent by the map glue.
///
/// Coordinates arrive as text so malformed values can be reported in the
/// JSON error body rather than by the extractor.
#[derive(Debug, Deserialize)]
pub struct CoordinatesRequest {
    pub lat: String,
    pub lng: String,
}

impl CoordinatesRequest {
    pub fn position(&self) -> Result<LatLng, String> {
        parse_position(&self.lat, &self.lng)
    }
}

/// Result of the browser's geolocation call.
#[derive(Debug, Default, Deserialize)]
pub struct LocateRequest {
    pub lat: Option<String>,
    pub lng: Option<String>,
    /// Reason reported by the browser when the lookup failed
    pub error: Option<String>,
    #[serde(default)]
    pub unsupported: bool,
}

impl LocateRequest {
    pub fn outcome(&self) -> Result<GeolocationOutcome, String> {
        if self.unsupported {
            return Ok(GeolocationOutcome::Unsupported);
        }
        if let Some(reason) = self.error.as_deref().filter(|r| !r.is_empty()) {
            return Ok(GeolocationOutcome::Denied(reason.to_string()));
        }
        match (&self.lat, &self.lng) {
            (Some(lat), Some(lng)) => parse_position(lat, lng).map(GeolocationOutcome::Position),
            _ => Err("Missing position".to_string()),
        }
    }
}

/// The filter controls as submitted by the filter form.
#[derive(Debug, Default, Deserialize)]
pub struct FilterRequest {
    /// Connector type name; empty means any
    pub connector: Option<String>,
    /// Minimum power in kW; empty means any
    pub power: Option<String>,
    /// Present when the "available only" checkbox is ticked
    pub available: Option<String>,
}

impl FilterRequest {
    pub fn criteria(&self) -> Result<FilterCriteria, String> {
        let min_power = match self.power.as_deref() {
            Some(power) => PowerThreshold::parse(power).map_err(|e| e.to_string())?,
            None => None,
        };

        Ok(FilterCriteria {
            connector_type: self.connector.clone().filter(|c| !c.is_empty()),
            min_power,
            available_only: self
                .available
                .as_deref()
                .is_some_and(|v| !v.is_empty() && v != "false"),
        })
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

fn parse_position(lat: &str, lng: &str) -> Result<LatLng, String> {
    let parse = |name: &str, value: &str| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("Invalid {name}: {value:?}"))
    };
    Ok(LatLng::new(parse("latitude", lat)?, parse("longitude", lng)?))
}
