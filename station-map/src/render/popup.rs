//! Marker popup rendering.

use askama::Template;

use crate::domain::Station;

use super::format::format_kw;

/// Summary popup attached to a station marker.
#[derive(Template)]
#[template(path = "station_popup.html")]
pub struct StationPopupTemplate {
    pub id: i64,
    pub name: String,
    pub available: bool,
    pub power: Option<String>,
    pub address: String,
}

/// Render the popup HTML for a station marker.
pub fn station_popup(station: &Station) -> String {
    StationPopupTemplate {
        id: station.id.0,
        name: station.name.clone(),
        available: station.has_available_connectors,
        power: station.max_power_kw.map(format_kw),
        address: station.address.clone().unwrap_or_default(),
    }
    .render()
    .unwrap_or_else(|e| format!("Template error: {}", e))
}
