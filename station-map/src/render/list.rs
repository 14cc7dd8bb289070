//! Station list rendering.

use askama::Template;

use crate::domain::Station;

use super::format::{format_distance, format_kw};

/// Station list fragment.
#[derive(Template)]
#[template(path = "station_list.html")]
pub struct StationListTemplate {
    pub stations: Vec<StationItemView>,
}

/// One entry of the station list.
#[derive(Debug, Clone, PartialEq)]
pub struct StationItemView {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Power badge text, e.g. "150kW".
    pub power: Option<String>,
    pub available: bool,
    /// e.g. "Distance: 2.5km", only for nearby results.
    pub distance: Option<String>,
}

impl StationItemView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.clone(),
            address: station.address.clone().unwrap_or_default(),
            power: station.max_power_kw.map(|kw| format!("{}kW", format_kw(kw))),
            available: station.has_available_connectors,
            distance: station.distance_meters.map(format_distance),
        }
    }
}

/// Render a station sequence as the sidebar list.
pub fn render_station_list(stations: &[Station]) -> String {
    StationListTemplate {
        stations: stations.iter().map(StationItemView::from_station).collect(),
    }
    .render()
    .unwrap_or_else(|e| format!("Template error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_placeholder() {
        let html = render_station_list(&[]);
        assert!(html.contains("No stations found"));
        assert!(!html.contains("station-item"));
    }

    #[test]
    fn entry_shows_name_address_power_and_availability() {
        let mut station = Station::new(7, "Lac 2").with_power(150.0).available();
        station.address = Some("Rue du Lac Windermere".into());

        let html = render_station_list(&[station]);
        assert!(html.contains("Lac 2"));
        assert!(html.contains("Rue du Lac Windermere"));
        assert!(html.contains("150kW"));
        assert!(html.contains("● Available"));
        assert!(html.contains(r#"href="/stations/7""#));
    }

    #[test]
    fn busy_station_without_power() {
        let html = render_station_list(&[Station::new(1, "Marsa")]);
        assert!(html.contains("● Busy"));
        assert!(!html.contains("power-badge"));
    }

    #[test]
    fn distance_only_when_present() {
        let mut near = Station::new(1, "Near");
        near.distance_meters = Some(2500.0);
        let html = render_station_list(&[near]);
        assert!(html.contains("Distance: 2.5km"));

        let html = render_station_list(&[Station::new(2, "Far")]);
        assert!(!html.contains("Distance:"));
    }

    #[test]
    fn station_without_coordinates_is_listed() {
        let html = render_station_list(&[Station::new(3, "Unplaced")]);
        assert!(html.contains("Unplaced"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render_station_list(&[Station::new(1, "<script>x</script>")]);
        assert!(!html.contains("<script>x"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
