//! Temperature prediction request and response types.

use serde::{Deserialize, Serialize};

use super::form::{NumericField, parse_fields};
use crate::core::error::InputError;

/// Current conditions fed to the temperature model, in request order.
pub const WEATHER_FEATURES: [NumericField; 3] = [
    NumericField {
        key: "humidity",
        label: "Humidity",
        unit: "%",
        range: Some((0.0, 100.0)),
        non_negative: true,
    },
    NumericField {
        key: "wind_speed",
        label: "Wind speed",
        unit: "km/h",
        range: None,
        non_negative: true,
    },
    NumericField {
        key: "pressure",
        label: "Pressure",
        unit: "hPa",
        range: None,
        non_negative: true,
    },
];

/// Body of a weather prediction request: `{"data": [a, b, c]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReadings {
    pub data: [f64; 3],
}

impl WeatherReadings {
    /// Build readings from raw form inputs ordered as [`WEATHER_FEATURES`].
    pub fn from_inputs(inputs: &[String]) -> Result<Self, InputError> {
        Ok(Self {
            data: parse_fields(&WEATHER_FEATURES, inputs)?,
        })
    }
}

/// Weather prediction response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    /// Predicted temperature in degrees Celsius.
    pub predicted_temperature: f64,
}
