//! The client session: one owned value holding everything the UI shows.
//!
//! All transitions are synchronous. Network calls happen in the
//! [`Controller`](super::Controller), which only touches the session to
//! take a fetch token before a request and to apply the result after it.

use tracing::{debug, info};

use crate::domain::{
    ConnectorType, FilterCriteria, LatLng, Station, StationDetail, Statistics, apply_filters,
};
use crate::map::{DETAIL_ZOOM, MapAdapter, MapWidget, SEARCH_ZOOM, Scene};
use crate::render::{
    PageTemplate, connector_options, power_options, render_detail, render_statistics,
    render_station_list, summary_line,
};

use super::store::{FetchSequence, FetchToken, StationStore};

/// Client state.
#[derive(Debug)]
pub struct Session<W> {
    store: StationStore,
    criteria: FilterCriteria,
    /// The filtered view of the store. Both the map markers and the list are
    /// produced from this one vector.
    visible: Vec<Station>,
    map: MapAdapter<W>,
    detail: Option<StationDetail>,
    detail_sequence: FetchSequence,
    statistics: Option<Statistics>,
    connector_types: Vec<ConnectorType>,
    query: String,
    alerts: Vec<String>,
}

impl<W: MapWidget> Session<W> {
    /// Create a session and initialise the map widget.
    pub fn new(widget: W) -> Self {
        Self {
            store: StationStore::new(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            map: MapAdapter::init(widget),
            detail: None,
            detail_sequence: FetchSequence::default(),
            statistics: None,
            connector_types: Vec::new(),
            query: String::new(),
            alerts: Vec::new(),
        }
    }

    /// Issue a token for a station-list fetch.
    pub fn begin_station_fetch(&mut self) -> FetchToken {
        self.store.begin_fetch()
    }

    /// Apply a station-list result and re-render both views.
    ///
    /// Returns `false` if the result was stale and ignored.
    pub fn apply_stations(&mut self, token: FetchToken, stations: Vec<Station>) -> bool {
        if !self.store.replace(token, stations) {
            return false;
        }
        info!(stations = self.store.len(), "Station store replaced");
        self.refresh_views();
        true
    }

    /// Apply a search result and center on its first positioned match.
    pub fn apply_search_results(
        &mut self,
        token: FetchToken,
        query: &str,
        stations: Vec<Station>,
    ) -> bool {
        let first = stations.first().and_then(Station::position);
        if !self.apply_stations(token, stations) {
            return false;
        }
        self.query = query.to_string();
        if let Some(position) = first {
            self.map.center_on(position, SEARCH_ZOOM);
        }
        true
    }

    /// Replace the filter controls and re-render both views.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh_views();
    }

    /// Recompute the filtered set and hand it to the map. The list is
    /// rendered from the same vector on demand.
    fn refresh_views(&mut self) {
        self.visible = apply_filters(self.store.stations(), &self.criteria);
        self.map.set_markers(&self.visible);
        debug!(
            total = self.store.len(),
            visible = self.visible.len(),
            "Views refreshed"
        );
    }

    /// Issue a token for a station-detail fetch.
    pub fn begin_detail_fetch(&mut self) -> FetchToken {
        self.detail_sequence.issue()
    }

    /// Open the detail overlay and center on the station.
    pub fn apply_detail(&mut self, token: FetchToken, detail: StationDetail) -> bool {
        if !self.detail_sequence.accept(token) {
            debug!(station = %detail.station.id, "Discarding stale station detail");
            return false;
        }
        if let Some(position) = detail.station.position() {
            self.map.center_on(position, DETAIL_ZOOM);
        }
        self.detail = Some(detail);
        true
    }

    /// Hide the detail overlay. Stations and markers are kept.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn set_statistics(&mut self, statistics: Statistics) {
        self.statistics = Some(statistics);
    }

    pub fn set_connector_types(&mut self, types: Vec<ConnectorType>) {
        self.connector_types = types;
    }

    /// Place the user-location marker and center on it.
    pub fn user_located(&mut self, position: LatLng) {
        self.map.set_user_marker(position);
    }

    /// Queue a message for the user.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    /// Take the queued alerts, leaving none behind.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn stations(&self) -> &[Station] {
        self.store.stations()
    }

    /// The filtered stations currently shown on the map and in the list.
    pub fn visible(&self) -> &[Station] {
        &self.visible
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn detail(&self) -> Option<&StationDetail> {
        self.detail.as_ref()
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }

    pub fn connector_types(&self) -> &[ConnectorType] {
        &self.connector_types
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn map(&self) -> &MapAdapter<W> {
        &self.map
    }

    /// The station list fragment for the visible stations.
    pub fn list_html(&self) -> String {
        render_station_list(&self.visible)
    }
}

impl Session<Scene> {
    /// Build the page for the current state, draining queued alerts.
    pub fn render_page(&mut self) -> PageTemplate {
        PageTemplate {
            query: self.query.clone(),
            connector_options: connector_options(
                &self.connector_types,
                self.criteria.connector_type.as_deref(),
            ),
            power_options: power_options(self.criteria.min_power),
            available_only: self.criteria.available_only,
            statistics_html: self.statistics.as_ref().map(render_statistics),
            list_html: self.list_html(),
            detail_html: self.detail.as_ref().map(render_detail),
            scene_json: self.map.widget().to_embedded_json(),
            alerts: self.take_alerts(),
            summary: summary_line(self.visible.len(), self.store.len()),
            updated_at: self
                .store
                .updated_at()
                .map(|at| at.format("%H:%M").to_string()),
        }
    }
}
