//! Charging station types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::connector::Connector;
use super::geo::LatLng;
use super::number::{null_as_false, optional_decimal};

/// Identifier of a charging station as assigned by the stations API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub i64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A charging location as returned by the list, search and nearby endpoints.
///
/// Stations are never edited client-side: each fetch replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,

    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub operator: Option<String>,

    #[serde(default)]
    pub opening_hours: Option<String>,

    #[serde(default)]
    pub fee: Option<String>,

    #[serde(default)]
    pub parking_fee: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default, deserialize_with = "optional_decimal")]
    pub max_power_kw: Option<f64>,

    #[serde(default, deserialize_with = "null_as_false")]
    pub has_available_connectors: bool,

    /// Only present in nearby-query results.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub distance_meters: Option<f64>,
}

impl Station {
    /// Create a station with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: StationId(id),
            name: name.into(),
            address: None,
            operator: None,
            opening_hours: None,
            fee: None,
            parking_fee: None,
            latitude: None,
            longitude: None,
            max_power_kw: None,
            has_available_connectors: false,
            distance_meters: None,
        }
    }

    /// Set the coordinate.
    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.latitude = Some(lat);
        self.longitude = Some(lng);
        self
    }

    /// Set the maximum power in kW.
    pub fn with_power(mut self, kw: f64) -> Self {
        self.max_power_kw = Some(kw);
        self
    }

    /// Mark the station as having free connectors.
    pub fn available(mut self) -> Self {
        self.has_available_connectors = true;
        self
    }

    /// The station's coordinate, if both latitude and longitude are known.
    ///
    /// Stations without a position are listed but never placed on the map.
    pub fn position(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }
}

/// Payload of the station detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDetail {
    pub station: Station,

    #[serde(default)]
    pub connectors: Vec<Connector>,
}
