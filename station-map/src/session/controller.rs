//! Event handlers: each user action or map event becomes one gateway call
//! followed by one session transition.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::domain::{ConnectorType, FilterCriteria, LatLng, StationId};
use crate::gateway::{NearbyQuery, StationApi, export_document};
use crate::map::{MapWidget, Scene};
use crate::render::PageTemplate;

use super::state::Session;

/// Alert shown when loading all stations fails.
pub const ERR_LOAD_STATIONS: &str = "Error loading stations";

/// Alert shown when a search fails.
pub const ERR_SEARCH: &str = "Error searching stations";

/// Alert shown when a station's detail cannot be loaded.
pub const ERR_DETAIL: &str = "Error loading station details";

/// Alert shown when the export fails.
pub const ERR_EXPORT: &str = "Error exporting data";

/// Alert shown when the browser has no geolocation support.
pub const ERR_GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";

/// What the platform geolocation service reported.
#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationOutcome {
    Position(LatLng),
    /// Denied or failed, with the platform's reason.
    Denied(String),
    Unsupported,
}

/// Drives a [`Session`] from UI events.
///
/// The session lock is held only for synchronous transitions, never across
/// a network call, so a slow request does not block rendering or other
/// events.
pub struct Controller<A, W = Scene> {
    api: Arc<A>,
    session: Arc<Mutex<Session<W>>>,
}

impl<A, W> Clone for Controller<A, W> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            session: Arc::clone(&self.session),
        }
    }
}

impl<A: StationApi, W: MapWidget + Send> Controller<A, W> {
    pub fn new(api: A, session: Session<W>) -> Self {
        Self {
            api: Arc::new(api),
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Startup: statistics, connector types and the full station list.
    pub async fn bootstrap(&self) {
        futures::join!(
            self.load_statistics(),
            self.load_connector_types(),
            self.load_all()
        );
    }

    /// Load every station. User-triggered: failures raise an alert and keep
    /// the stations already shown.
    pub async fn load_all(&self) {
        let token = self.session.lock().await.begin_station_fetch();

        match self.api.fetch_all_stations().await {
            Ok(Some(stations)) => {
                self.session.lock().await.apply_stations(token, stations);
            }
            Ok(None) => info!("Station list returned no result"),
            Err(e) => {
                error!(error = %e, "Error loading stations");
                self.session.lock().await.alert(ERR_LOAD_STATIONS);
            }
        }
    }

    /// Search by free text. An empty query loads every station.
    pub async fn search(&self, query: &str) {
        let token = self.session.lock().await.begin_station_fetch();

        match self.api.search_stations(query).await {
            Ok(Some(stations)) => {
                self.session
                    .lock()
                    .await
                    .apply_search_results(token, query, stations);
            }
            Ok(None) => info!(query, "Search returned no result"),
            Err(e) => {
                error!(query, error = %e, "Error searching stations");
                self.session.lock().await.alert(ERR_SEARCH);
            }
        }
    }

    /// Map click: load stations around the clicked point. Background call,
    /// failures are only logged.
    pub async fn map_clicked(&self, position: LatLng) {
        info!(%position, "Map clicked");
        self.load_nearby(position).await;
    }

    async fn load_nearby(&self, position: LatLng) {
        let token = self.session.lock().await.begin_station_fetch();

        match self
            .api
            .fetch_nearby_stations(NearbyQuery::around(position))
            .await
        {
            Ok(Some(stations)) => {
                self.session.lock().await.apply_stations(token, stations);
            }
            Ok(None) => info!(%position, "Nearby query returned no result"),
            Err(e) => warn!(%position, error = %e, "Error loading nearby stations"),
        }
    }

    /// "Locate me": place the user marker and load what is nearby.
    pub async fn locate(&self, outcome: GeolocationOutcome) {
        match outcome {
            GeolocationOutcome::Position(position) => {
                self.session.lock().await.user_located(position);
                self.load_nearby(position).await;
            }
            GeolocationOutcome::Denied(reason) => {
                warn!(reason = %reason, "Geolocation failed");
                self.session
                    .lock()
                    .await
                    .alert(format!("Unable to get your location: {reason}"));
            }
            GeolocationOutcome::Unsupported => {
                self.session.lock().await.alert(ERR_GEOLOCATION_UNSUPPORTED);
            }
        }
    }

    /// Filter controls changed.
    pub async fn filter_changed(&self, criteria: FilterCriteria) {
        self.session.lock().await.set_criteria(criteria);
    }

    /// Open the detail overlay for a station.
    pub async fn show_detail(&self, id: StationId) {
        let token = self.session.lock().await.begin_detail_fetch();

        match self.api.fetch_station_detail(id).await {
            Ok(Some(detail)) => {
                self.session.lock().await.apply_detail(token, detail);
            }
            Ok(None) => info!(station = %id, "Station detail returned no result"),
            Err(e) => {
                error!(station = %id, error = %e, "Error loading station details");
                self.session.lock().await.alert(ERR_DETAIL);
            }
        }
    }

    pub async fn close_detail(&self) {
        self.session.lock().await.close_detail();
    }

    /// Fetch the GeoJSON export, pretty-printed for download.
    ///
    /// Returns `None` after raising an alert if the export failed.
    pub async fn export(&self) -> Option<String> {
        let rendered = self
            .api
            .export_geojson()
            .await
            .and_then(|doc| export_document(&doc));

        match rendered {
            Ok(body) => Some(body),
            Err(e) => {
                error!(error = %e, "Error exporting GeoJSON");
                self.session.lock().await.alert(ERR_EXPORT);
                None
            }
        }
    }

    /// Fetch the connector types. Failures yield an empty list.
    pub async fn connector_types(&self) -> Vec<ConnectorType> {
        self.load_connector_types().await;
        self.session.lock().await.connector_types().to_vec()
    }

    async fn load_connector_types(&self) {
        match self.api.fetch_connector_types().await {
            Ok(Some(types)) => self.session.lock().await.set_connector_types(types),
            Ok(None) => info!("Connector types returned no result"),
            Err(e) => warn!(error = %e, "Error loading connector types"),
        }
    }

    async fn load_statistics(&self) {
        match self.api.fetch_statistics().await {
            Ok(Some(stats)) => self.session.lock().await.set_statistics(stats),
            Ok(None) => info!("Statistics returned no result"),
            Err(e) => warn!(error = %e, "Error loading statistics"),
        }
    }

    /// Run `f` against the current session.
    pub async fn inspect<R>(&self, f: impl FnOnce(&Session<W>) -> R) -> R {
        f(&*self.session.lock().await)
    }
}

impl<A: StationApi> Controller<A, Scene> {
    /// Render the page, draining queued alerts.
    pub async fn render_page(&self) -> PageTemplate {
        self.session.lock().await.render_page()
    }
}
