//! Network-wide aggregate statistics.

use serde::{Deserialize, Serialize};

use super::number::optional_decimal;

/// Aggregate counts reported by the statistics endpoint.
///
/// Every field may be absent; the statistics panel shows `0` or `N/A`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_stations: Option<i64>,

    #[serde(default)]
    pub total_connectors: Option<i64>,

    #[serde(default)]
    pub available_connectors: Option<i64>,

    #[serde(default)]
    pub stations_with_available: Option<i64>,

    #[serde(default, deserialize_with = "optional_decimal")]
    pub avg_power_kw: Option<f64>,
}
