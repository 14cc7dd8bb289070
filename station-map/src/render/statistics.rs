//! Statistics panel rendering.

use askama::Template;

use crate::domain::Statistics;

use super::format::format_kw;

/// Statistics fragment.
#[derive(Template)]
#[template(path = "statistics.html")]
pub struct StatisticsTemplate {
    pub total_stations: i64,
    pub total_connectors: i64,
    pub available_connectors: i64,
    pub stations_with_available: Option<i64>,
    /// e.g. "43.25 kW", or "N/A".
    pub avg_power: String,
}

impl StatisticsTemplate {
    pub fn from_statistics(stats: &Statistics) -> Self {
        Self {
            total_stations: stats.total_stations.unwrap_or(0),
            total_connectors: stats.total_connectors.unwrap_or(0),
            available_connectors: stats.available_connectors.unwrap_or(0),
            stations_with_available: stats.stations_with_available,
            avg_power: stats
                .avg_power_kw
                .map(|kw| format!("{} kW", format_kw(kw)))
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Render the statistics panel.
pub fn render_statistics(stats: &Statistics) -> String {
    StatisticsTemplate::from_statistics(stats)
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e))
}
