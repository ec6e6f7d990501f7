//! Prediction service client.
//!
//! Wraps the three service endpoints: health check, soil fertility analysis
//! and temperature prediction.

use crate::config::api;
use crate::core::error::FetchError;
use crate::models::{HealthStatus, SoilReport, SoilSample, WeatherForecast, WeatherReadings};
use crate::utils::{fetch_json, post_json};

/// Client bound to one service base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the configured service address.
    pub fn from_config() -> Self {
        Self::new(api::BASE_URL)
    }

    /// Join the base URL and an endpoint path with exactly one `/`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Which models the service currently has loaded.
    pub async fn health(&self) -> Result<HealthStatus, FetchError> {
        fetch_json(&self.endpoint(api::HEALTH_PATH)).await
    }

    /// Classify soil fertility from a soil test.
    pub async fn analyze_soil(&self, sample: &SoilSample) -> Result<SoilReport, FetchError> {
        post_json(&self.endpoint(api::SOIL_ANALYSIS_PATH), sample).await
    }

    /// Predict the temperature from current conditions.
    pub async fn predict_weather(
        &self,
        readings: &WeatherReadings,
    ) -> Result<WeatherForecast, FetchError> {
        post_json(&self.endpoint(api::WEATHER_PREDICTION_PATH), readings).await
    }
}
