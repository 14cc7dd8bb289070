//! In-memory stations API for tests.
//!
//! Serves canned stations and details as if they were live API responses,
//! records every call, and can be switched into a failing mode.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::{ConnectorType, Station, StationDetail, StationId, Statistics};

use super::api::{NearbyQuery, StationApi};
use super::error::GatewayError;

/// Mock stations API.
#[derive(Debug, Default)]
pub struct MockStationApi {
    /// Returned by the list and search endpoints.
    pub stations: Vec<Station>,
    /// Returned by the nearby endpoint, regardless of position.
    pub nearby: Vec<Station>,
    pub details: HashMap<StationId, StationDetail>,
    pub statistics: Option<Statistics>,
    pub connector_types: Option<Vec<ConnectorType>>,
    pub geojson: Value,
    /// When set, every call fails with this HTTP status.
    pub fail_status: Option<u16>,
    /// When set, enveloped calls answer `success: false`.
    pub unsuccessful: bool,
    calls: Mutex<Vec<String>>,
}

impl MockStationApi {
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations,
            ..Default::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, detail: StationDetail) -> Self {
        self.details.insert(detail.station.id, detail);
        self
    }

    pub fn with_nearby(mut self, nearby: Vec<Station>) -> Self {
        self.nearby = nearby;
        self
    }

    /// Calls made so far, as `endpoint` or `endpoint:argument` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_status {
            Some(status) => Err(GatewayError::Api {
                status,
                message: "mock failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn answer<T>(&self, data: Option<T>) -> Option<T> {
        if self.unsuccessful { None } else { data }
    }
}

impl StationApi for MockStationApi {
    async fn fetch_all_stations(&self) -> Result<Option<Vec<Station>>, GatewayError> {
        self.record("stations".to_string())?;
        Ok(self.answer(Some(self.stations.clone())))
    }

    async fn fetch_nearby_stations(
        &self,
        query: NearbyQuery,
    ) -> Result<Option<Vec<Station>>, GatewayError> {
        self.record(format!(
            "nearby:{}:{}:{}",
            query.position, query.radius, query.limit
        ))?;
        Ok(self.answer(Some(self.nearby.clone())))
    }

    async fn search_stations(&self, query: &str) -> Result<Option<Vec<Station>>, GatewayError> {
        if query.is_empty() {
            return self.fetch_all_stations().await;
        }
        self.record(format!("search:{query}"))?;
        let needle = query.to_lowercase();
        let matches = self
            .stations
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(self.answer(Some(matches)))
    }

    async fn fetch_station_detail(
        &self,
        id: StationId,
    ) -> Result<Option<StationDetail>, GatewayError> {
        self.record(format!("detail:{id}"))?;
        Ok(self.answer(self.details.get(&id).cloned()))
    }

    async fn fetch_statistics(&self) -> Result<Option<Statistics>, GatewayError> {
        self.record("statistics".to_string())?;
        Ok(self.answer(self.statistics.clone()))
    }

    async fn fetch_connector_types(&self) -> Result<Option<Vec<ConnectorType>>, GatewayError> {
        self.record("connector_types".to_string())?;
        Ok(self.answer(self.connector_types.clone()))
    }

    async fn export_geojson(&self) -> Result<Value, GatewayError> {
        self.record("export".to_string())?;
        Ok(self.geojson.clone())
    }
}
