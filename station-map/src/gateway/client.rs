//! HTTP client for the charging-stations REST API.

use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::{ConnectorType, Station, StationDetail, StationId, Statistics};

use super::api::{NearbyQuery, StationApi};
use super::envelope::Envelope;
use super::error::GatewayError;

/// Default base URL: the API service on its own local port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Configuration for the stations API client.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds. Requests never time out when unset.
    pub timeout_secs: Option<u64>,
}

impl GatewayConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the stations API.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a new API client.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(format!("{}{}", self.base_url, path))
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String, GatewayError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }

    /// Send a request and unwrap the `{success, data}` envelope.
    async fn fetch_enveloped<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<Option<T>, GatewayError> {
        let body = self.send(request).await?;

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| GatewayError::Json {
                message: e.to_string(),
            })?;

        if !envelope.success {
            debug!(
                endpoint,
                message = envelope.message.as_deref().unwrap_or(""),
                "API reported no result"
            );
        }

        Ok(envelope.into_data())
    }
}

impl StationApi for GatewayClient {
    async fn fetch_all_stations(&self) -> Result<Option<Vec<Station>>, GatewayError> {
        debug!("Fetching all stations");
        self.fetch_enveloped("stations", self.get("/stations"))
            .await
    }

    async fn fetch_nearby_stations(
        &self,
        query: NearbyQuery,
    ) -> Result<Option<Vec<Station>>, GatewayError> {
        debug!(
            position = %query.position,
            radius = query.radius,
            limit = query.limit,
            "Fetching nearby stations"
        );
        let request = self.get("/stations/nearby").query(&[
            ("lat", query.position.lat.to_string()),
            ("lng", query.position.lng.to_string()),
            ("radius", query.radius.to_string()),
            ("limit", query.limit.to_string()),
        ]);
        self.fetch_enveloped("stations/nearby", request).await
    }

    async fn search_stations(&self, query: &str) -> Result<Option<Vec<Station>>, GatewayError> {
        if query.is_empty() {
            return self.fetch_all_stations().await;
        }

        debug!(query, "Searching stations");
        let request = self.get("/stations/search").query(&[("query", query)]);
        self.fetch_enveloped("stations/search", request).await
    }

    async fn fetch_station_detail(
        &self,
        id: StationId,
    ) -> Result<Option<StationDetail>, GatewayError> {
        debug!(station = %id, "Fetching station detail");
        self.fetch_enveloped("stations/{id}", self.get(&format!("/stations/{id}")))
            .await
    }

    async fn fetch_statistics(&self) -> Result<Option<Statistics>, GatewayError> {
        debug!("Fetching statistics");
        self.fetch_enveloped("statistics", self.get("/statistics"))
            .await
    }

    async fn fetch_connector_types(&self) -> Result<Option<Vec<ConnectorType>>, GatewayError> {
        debug!("Fetching connector types");
        self.fetch_enveloped("connectors/types", self.get("/connectors/types"))
            .await
    }

    async fn export_geojson(&self) -> Result<Value, GatewayError> {
        debug!("Exporting GeoJSON");
        let body = self.send(self.get("/export/geojson")).await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Json {
            message: e.to_string(),
        })
    }
}
