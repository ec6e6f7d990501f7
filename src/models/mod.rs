//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`] - Static route table
//! - [`VideoEmbed`] - Embedded player parameters
//! - [`SoilSample`], [`SoilReport`] - Soil fertility analysis
//! - [`WeatherReadings`], [`WeatherForecast`] - Temperature prediction
//! - [`HealthStatus`] - Prediction service availability
//! - [`NumericField`], [`RequestState`] - Form handling

mod form;
mod health;
mod route;
mod soil;
mod video;
mod weather;

pub use form::{NumericField, RequestState};
pub use health::HealthStatus;
#[cfg(all(test, target_arch = "wasm32"))]
pub use health::ModelsLoaded;
pub use route::AppRoute;
pub use soil::{Fertility, SOIL_FEATURES, SoilReport, SoilSample};
pub use video::VideoEmbed;
pub use weather::{WEATHER_FEATURES, WeatherForecast, WeatherReadings};
