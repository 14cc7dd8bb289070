//! Map adapter over the external map widget.

mod adapter;
mod scene;
mod widget;

pub use adapter::{
    DEFAULT_CENTER, DEFAULT_ZOOM, DETAIL_ZOOM, MapAdapter, SEARCH_ZOOM, USER_ZOOM,
};
pub use scene::{PlacedMarker, Scene};
pub use widget::{MapWidget, Marker, MarkerAction, MarkerId, TileLayer};
