//! The gateway seam between the session and the stations API.

use std::future::Future;

use serde_json::Value;

use crate::domain::{ConnectorType, LatLng, Station, StationDetail, StationId, Statistics};

use super::error::GatewayError;

/// Default nearby search radius in metres.
pub const DEFAULT_NEARBY_RADIUS: u32 = 5000;

/// Default maximum number of nearby results.
pub const DEFAULT_NEARBY_LIMIT: u32 = 50;

/// A radius-bounded lookup around a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub position: LatLng,
    /// Radius in metres.
    pub radius: u32,
    pub limit: u32,
}

impl NearbyQuery {
    /// A nearby query with the default radius and limit.
    pub fn around(position: LatLng) -> Self {
        Self {
            position,
            radius: DEFAULT_NEARBY_RADIUS,
            limit: DEFAULT_NEARBY_LIMIT,
        }
    }
}

/// Operations offered by the stations API.
///
/// Enveloped operations return `Ok(None)` when the API answers with
/// `success: false` or without `data`; callers treat that as "no results"
/// and leave their state alone.
pub trait StationApi: Send + Sync + 'static {
    /// `GET /stations`
    fn fetch_all_stations(
        &self,
    ) -> impl Future<Output = Result<Option<Vec<Station>>, GatewayError>> + Send;

    /// `GET /stations/nearby`; every result carries `distance_meters`.
    fn fetch_nearby_stations(
        &self,
        query: NearbyQuery,
    ) -> impl Future<Output = Result<Option<Vec<Station>>, GatewayError>> + Send;

    /// `GET /stations/search`. An empty query is the same as
    /// [`fetch_all_stations`](StationApi::fetch_all_stations).
    fn search_stations(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Vec<Station>>, GatewayError>> + Send;

    /// `GET /stations/{id}`
    fn fetch_station_detail(
        &self,
        id: StationId,
    ) -> impl Future<Output = Result<Option<StationDetail>, GatewayError>> + Send;

    /// `GET /statistics`
    fn fetch_statistics(
        &self,
    ) -> impl Future<Output = Result<Option<Statistics>, GatewayError>> + Send;

    /// `GET /connectors/types`
    fn fetch_connector_types(
        &self,
    ) -> impl Future<Output = Result<Option<Vec<ConnectorType>>, GatewayError>> + Send;

    /// `GET /export/geojson`. The document is returned as-is, without
    /// envelope handling.
    fn export_geojson(&self) -> impl Future<Output = Result<Value, GatewayError>> + Send;
}
