//! Client-side station filtering.
//!
//! Filtering is a pure function of the current station set and the filter
//! controls. The session applies it once per change and hands the same result
//! to both the map and the list.

use std::fmt;

use tracing::info;

use super::station::Station;

/// Error returned when parsing an invalid power threshold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid power threshold: {input:?}")]
pub struct InvalidPowerThreshold {
    input: String,
}

/// Minimum maximum-power, in whole kW, a station must offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowerThreshold(u32);

impl PowerThreshold {
    pub const fn from_kw(kw: u32) -> Self {
        Self(kw)
    }

    pub fn kw(&self) -> u32 {
        self.0
    }

    /// Parse the power control's value.
    ///
    /// An empty value means "any power" and yields `Ok(None)`. Otherwise the
    /// leading decimal digits are taken as the threshold, so `"50"` and
    /// `"50kW"` both parse to 50.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_map::domain::PowerThreshold;
    ///
    /// assert_eq!(PowerThreshold::parse("").unwrap(), None);
    /// assert_eq!(PowerThreshold::parse("50").unwrap().unwrap().kw(), 50);
    /// assert_eq!(PowerThreshold::parse("22kW").unwrap().unwrap().kw(), 22);
    /// assert!(PowerThreshold::parse("fast").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Option<Self>, InvalidPowerThreshold> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
            Some(end) => &trimmed[..end],
            None => trimmed,
        };

        digits
            .parse::<u32>()
            .map(|kw| Some(Self(kw)))
            .map_err(|_| InvalidPowerThreshold {
                input: input.to_string(),
            })
    }

    /// Whether a station with the given maximum power meets the threshold.
    ///
    /// Unknown power never meets a threshold.
    pub fn admits(&self, max_power_kw: Option<f64>) -> bool {
        max_power_kw.is_some_and(|kw| kw >= f64::from(self.0))
    }
}

impl fmt::Display for PowerThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state of the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected connector type. Not applied: the list endpoints do not carry
    /// connector data, so this needs a per-station detail call to honour.
    pub connector_type: Option<String>,

    pub min_power: Option<PowerThreshold>,

    pub available_only: bool,
}

impl FilterCriteria {
    /// Whether no filter is selected.
    pub fn is_empty(&self) -> bool {
        self.connector_type.is_none() && self.min_power.is_none() && !self.available_only
    }
}

/// Apply the filter controls to a station set, preserving order.
///
/// Filters run in a fixed order: connector type (no-op), minimum power,
/// availability.
pub fn apply_filters(stations: &[Station], criteria: &FilterCriteria) -> Vec<Station> {
    if let Some(connector_type) = &criteria.connector_type {
        info!(
            connector_type = %connector_type,
            "Connector type filter selected but not supported without detail data"
        );
    }

    stations
        .iter()
        .filter(|s| {
            criteria
                .min_power
                .is_none_or(|threshold| threshold.admits(s.max_power_kw))
        })
        .filter(|s| !criteria.available_only || s.has_available_connectors)
        .cloned()
        .collect()
}
