//! HTTP client for the Saillogger AIS API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::{debug, instrument};

use super::error::AisError;
use super::vessel::Vessel;
use crate::core::config::AisConfig;

/// A source of vessel records around a point.
///
/// The AIS tool only depends on this trait, so alternative feeds can be
/// plugged in without touching the tool.
#[async_trait]
pub trait VesselSource: Send + Sync {
    /// Fetch all vessels within `radius_nm` nautical miles of a position.
    async fn fetch_vessels(
        &self,
        latitude: f64,
        longitude: f64,
        radius_nm: f64,
    ) -> Result<Vec<Vessel>, AisError>;

    /// Human readable description of where the data comes from.
    fn endpoint(&self) -> &str;
}

/// Query string of the `/vessels/` endpoint, in wire order.
#[derive(Debug, Serialize)]
struct VesselsQuery {
    format: &'static str,
    latitude: f64,
    longitude: f64,
    radius_nm: f64,
}

/// Client for `GET {base}/vessels/`.
#[derive(Debug, Clone)]
pub struct AisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AisClient {
    /// Build a client with the configured user agent, `Accept` header and timeout.
    pub fn new(config: &AisConfig) -> Result<Self, AisError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| AisError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for a lookup.
    pub fn vessels_url(
        &self,
        latitude: f64,
        longitude: f64,
        radius_nm: f64,
    ) -> Result<String, AisError> {
        let query = serde_urlencoded::to_string(VesselsQuery {
            format: "json",
            latitude,
            longitude,
            radius_nm,
        })
        .map_err(|e| AisError::Client(e.to_string()))?;

        Ok(format!("{}/vessels/?{}", self.base_url, query))
    }
}

#[async_trait]
impl VesselSource for AisClient {
    #[instrument(skip(self))]
    async fn fetch_vessels(
        &self,
        latitude: f64,
        longitude: f64,
        radius_nm: f64,
    ) -> Result<Vec<Vessel>, AisError> {
        let url = self.vessels_url(latitude, longitude, radius_nm)?;
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AisError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("AIS response received: {} bytes", body.len());

        Vessel::parse_list(&body).map_err(|e| AisError::Decode(format!("JSON parse error: {e}")))
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}
