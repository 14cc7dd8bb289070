//! Map adapter: keeps the widget's markers in step with the client state.

use tracing::debug;

use crate::domain::{LatLng, Station};
use crate::render::station_popup;

use super::widget::{MapWidget, Marker, MarkerAction, MarkerId, TileLayer};

/// Initial map center (Tunis).
pub const DEFAULT_CENTER: LatLng = LatLng::new(36.8065, 10.1815);

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 12;

/// Zoom used when centering on a search result.
pub const SEARCH_ZOOM: u8 = 13;

/// Zoom used when centering on the user's location.
pub const USER_ZOOM: u8 = 14;

/// Zoom used when centering on a station's detail.
pub const DETAIL_ZOOM: u8 = 15;

/// Popup text of the user-location marker.
const USER_POPUP: &str = "Your location";

/// Wraps a [`MapWidget`] and owns the bookkeeping of which markers are
/// station markers and which one is the user's location.
#[derive(Debug)]
pub struct MapAdapter<W> {
    widget: W,
    station_markers: Vec<MarkerId>,
    user_marker: Option<MarkerId>,
}

impl<W: MapWidget> MapAdapter<W> {
    /// Initialise the widget: default view, OpenStreetMap tiles, scale bar.
    pub fn init(mut widget: W) -> Self {
        widget.set_view(DEFAULT_CENTER, DEFAULT_ZOOM);
        widget.add_tile_layer(TileLayer::openstreetmap());
        widget.add_scale_control();

        Self {
            widget,
            station_markers: Vec::new(),
            user_marker: None,
        }
    }

    /// Replace all station markers with one marker per positioned station.
    ///
    /// Stations without a coordinate are skipped. Returns the number of
    /// markers placed.
    pub fn set_markers(&mut self, stations: &[Station]) -> usize {
        for id in self.station_markers.drain(..) {
            self.widget.remove_marker(id);
        }

        for station in stations {
            let Some(position) = station.position() else {
                continue;
            };
            let id = self.widget.add_marker(Marker {
                position,
                popup_html: station_popup(station),
                on_click: Some(MarkerAction::ShowStation { id: station.id }),
            });
            self.station_markers.push(id);
        }

        debug!(
            stations = stations.len(),
            markers = self.station_markers.len(),
            "Station markers placed"
        );
        self.station_markers.len()
    }

    /// Move the user-location marker to `position`, open its popup and
    /// center on it.
    pub fn set_user_marker(&mut self, position: LatLng) {
        if let Some(previous) = self.user_marker.take() {
            self.widget.remove_marker(previous);
        }

        let id = self.widget.add_marker(Marker {
            position,
            popup_html: USER_POPUP.to_string(),
            on_click: None,
        });
        self.widget.open_popup(id);
        self.widget.set_view(position, USER_ZOOM);
        self.user_marker = Some(id);
    }

    /// Recenter without touching markers.
    pub fn center_on(&mut self, position: LatLng, zoom: u8) {
        self.widget.set_view(position, zoom);
    }

    pub fn station_marker_count(&self) -> usize {
        self.station_markers.len()
    }

    pub fn user_marker(&self) -> Option<MarkerId> {
        self.user_marker
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }
}
