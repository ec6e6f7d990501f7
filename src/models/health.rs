//! Prediction service health report.

use serde::{Deserialize, Serialize};

/// Which models the service has loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsLoaded {
    pub soil_analysis: bool,
    pub weather_prediction: bool,
}

/// Response of the health check endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub models_loaded: ModelsLoaded,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
