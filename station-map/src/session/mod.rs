//! Client session state and the event handlers that drive it.

mod controller;
mod state;
mod store;

pub use controller::{
    Controller, ERR_DETAIL, ERR_EXPORT, ERR_GEOLOCATION_UNSUPPORTED, ERR_LOAD_STATIONS,
    ERR_SEARCH, GeolocationOutcome,
};
pub use state::Session;
pub use store::{FetchSequence, FetchToken, StationStore};
