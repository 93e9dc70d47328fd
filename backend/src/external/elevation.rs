//! Ground elevation client
//!
//! Integrates with the Open-Elevation lookup API. Footprint derivation must
//! keep working when this service is down, so callers degrade a failed
//! lookup to a default elevation instead of propagating the error.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::ElevationConfig;
use crate::error::{AppError, AppResult};

/// Elevation API client
#[derive(Clone)]
pub struct ElevationClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// Open-Elevation API response
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: f64,
}

impl ElevationClient {
    /// Create a new ElevationClient from configuration
    pub fn new(config: &ElevationConfig) -> Self {
        Self::with_base_url(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Create a new ElevationClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetch the ground elevation in meters at the given coordinates
    pub async fn get_ground_elevation(&self, latitude: f64, longitude: f64) -> AppResult<f64> {
        let url = format!(
            "{}/lookup?locations={},{}",
            self.base_url, latitude, longitude
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::ElevationService(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ElevationService(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: LookupResponse = response
            .json()
            .await
            .map_err(|e| AppError::ElevationService(format!("malformed response: {}", e)))?;

        data.results
            .first()
            .map(|r| r.elevation)
            .ok_or_else(|| AppError::ElevationService("empty result set".to_string()))
    }
}
