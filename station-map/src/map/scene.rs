//! Server-side model of the browser map widget.
//!
//! `Scene` records the view, layers and markers the client has asked for.
//! The page serialises it to JSON and the Leaflet glue script draws it.

use serde::Serialize;

use crate::domain::LatLng;

use super::widget::{MapWidget, Marker, MarkerId, TileLayer};

/// A marker together with its handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedMarker {
    pub id: MarkerId,
    #[serde(flatten)]
    pub marker: Marker,
}

/// The current state of the map widget.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    pub center: Option<LatLng>,
    pub zoom: u8,
    pub tile_layers: Vec<TileLayer>,
    pub scale_control: bool,
    pub markers: Vec<PlacedMarker>,
    pub open_popup: Option<MarkerId>,
    #[serde(skip)]
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a placed marker.
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|placed| placed.id == id)
            .map(|placed| &placed.marker)
    }

    /// Serialise for embedding in a `<script type="application/json">` block.
    ///
    /// `</` is escaped so popup HTML cannot close the script element early.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }
}

impl MapWidget for Scene {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = Some(center);
        self.zoom = zoom;
    }

    fn add_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layers.push(layer);
    }

    fn add_scale_control(&mut self) {
        self.scale_control = true;
    }

    fn add_marker(&mut self, marker: Marker) -> MarkerId {
        self.next_id += 1;
        let id = MarkerId(self.next_id);
        self.markers.push(PlacedMarker { id, marker });
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.retain(|placed| placed.id != id);
        if self.open_popup == Some(id) {
            self.open_popup = None;
        }
    }

    fn open_popup(&mut self, id: MarkerId) {
        if self.marker(id).is_some() {
            self.open_popup = Some(id);
        }
    }
}
