//! Station detail panel rendering.

use askama::Template;

use crate::domain::{Connector, StationDetail};

use super::format::format_kw;

/// Shown when a station has no address.
const NO_ADDRESS: &str = "No address available";

/// Detail overlay fragment.
#[derive(Template)]
#[template(path = "station_detail.html")]
pub struct DetailPanelTemplate {
    pub name: String,
    pub address: String,
    pub meta: Vec<MetaRow>,
    pub connectors: Vec<ConnectorView>,
}

/// An optional descriptive row (operator, hours, fees).
#[derive(Debug, Clone, PartialEq)]
pub struct MetaRow {
    pub label: &'static str,
    pub value: String,
}

/// Connector view model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorView {
    pub connector_type: String,
    pub current_type: String,
    /// Power in kW, or "N/A".
    pub power: String,
    pub status: String,
    pub count_available: i32,
    pub count_total: i32,
    pub available: bool,
}

impl ConnectorView {
    pub fn from_connector(connector: &Connector) -> Self {
        Self {
            connector_type: connector.connector_type.clone(),
            current_type: connector.current_type.clone(),
            power: connector
                .power_kw
                .map(format_kw)
                .unwrap_or_else(|| "N/A".to_string()),
            status: connector.status.clone(),
            count_available: connector.count_available,
            count_total: connector.count_total,
            available: connector.is_available(),
        }
    }

    /// CSS class flagging the connector.
    pub fn availability_class(&self) -> &'static str {
        if self.available {
            "available"
        } else {
            "unavailable"
        }
    }
}

impl DetailPanelTemplate {
    pub fn from_detail(detail: &StationDetail) -> Self {
        let station = &detail.station;

        let meta = [
            ("Operator", &station.operator),
            ("Hours", &station.opening_hours),
            ("Fee", &station.fee),
            ("Parking Fee", &station.parking_fee),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.as_ref().map(|value| MetaRow {
                label,
                value: value.clone(),
            })
        })
        .collect();

        Self {
            name: station.name.clone(),
            address: station
                .address
                .clone()
                .unwrap_or_else(|| NO_ADDRESS.to_string()),
            meta,
            connectors: detail
                .connectors
                .iter()
                .map(ConnectorView::from_connector)
                .collect(),
        }
    }
}

/// Render the detail overlay content for a station.
pub fn render_detail(detail: &StationDetail) -> String {
    DetailPanelTemplate::from_detail(detail)
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;

    fn connector(available: i32, power: Option<f64>) -> Connector {
        Connector {
            connector_type: "Type 2".into(),
            current_type: "AC".into(),
            power_kw: power,
            status: "operational".into(),
            count_available: available,
            count_total: 4,
        }
    }

    fn detail(connectors: Vec<Connector>) -> StationDetail {
        StationDetail {
            station: Station::new(5, "Ariana"),
            connectors,
        }
    }

    #[test]
    fn connector_availability_flag() {
        let view = DetailPanelTemplate::from_detail(&detail(vec![
            connector(0, Some(22.0)),
            connector(3, Some(22.0)),
        ]));
        assert_eq!(view.connectors[0].availability_class(), "unavailable");
        assert_eq!(view.connectors[1].availability_class(), "available");

        let html = render_detail(&detail(vec![connector(0, None)]));
        assert!(html.contains("connector-item unavailable"));
    }

    #[test]
    fn connector_rows() {
        let html = render_detail(&detail(vec![connector(3, Some(22.0)), connector(1, None)]));
        assert!(html.contains("Connectors (2)"));
        assert!(html.contains("<strong>Type 2</strong> (AC)"));
        assert!(html.contains("Power: 22 kW"));
        assert!(html.contains("Power: N/A kW"));
        assert!(html.contains("Status: operational"));
        assert!(html.contains("Available: 3/4"));
    }

    #[test]
    fn missing_address_uses_placeholder() {
        let html = render_detail(&detail(vec![]));
        assert!(html.contains("No address available"));
        assert!(html.contains("Connectors (0)"));
    }

    #[test]
    fn meta_rows_omitted_when_absent() {
        let mut d = detail(vec![]);
        d.station.operator = Some("STEG".into());
        d.station.parking_fee = Some("no".into());

        let view = DetailPanelTemplate::from_detail(&d);
        let labels: Vec<&str> = view.meta.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Operator", "Parking Fee"]);

        let html = render_detail(&d);
        assert!(html.contains("<strong>Operator:</strong> STEG"));
        assert!(!html.contains("Hours:"));
        assert!(!html.contains("<strong>Fee:</strong>"));
    }
}
