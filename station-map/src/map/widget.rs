//! Contract of the external map widget.
//!
//! The widget itself (tile loading, marker drawing, popups) lives in the
//! browser. This trait is the surface the rest of the client drives it
//! through.

use serde::Serialize;

use crate::domain::{LatLng, StationId};

/// Handle to a marker placed on the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MarkerId(pub u64);

/// What happens when a marker is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerAction {
    /// Open the detail panel for a station.
    ShowStation { id: StationId },
}

/// A marker to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    /// Popup content, already rendered as HTML.
    pub popup_html: String,
    pub on_click: Option<MarkerAction>,
}

/// A raster tile source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    /// The public OpenStreetMap tile server.
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            max_zoom: 19,
        }
    }
}

/// Operations the client needs from a map widget.
pub trait MapWidget {
    /// Center the view on `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    fn add_tile_layer(&mut self, layer: TileLayer);

    fn add_scale_control(&mut self);

    /// Place a marker and return its handle.
    fn add_marker(&mut self, marker: Marker) -> MarkerId;

    /// Remove a marker. Unknown handles are ignored.
    fn remove_marker(&mut self, id: MarkerId);

    /// Open a marker's popup.
    fn open_popup(&mut self, id: MarkerId);
}
