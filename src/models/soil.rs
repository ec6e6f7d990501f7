//! Soil fertility request and response types.

use serde::{Deserialize, Serialize};

use super::form::{NumericField, parse_fields};
use crate::core::error::InputError;

const fn nutrient(key: &'static str, label: &'static str, unit: &'static str) -> NumericField {
    NumericField {
        key,
        label,
        unit,
        range: None,
        non_negative: true,
    }
}

/// Soil test measurements, in the order the prediction service expects.
pub const SOIL_FEATURES: [NumericField; 12] = [
    nutrient("N", "Nitrogen", "kg/ha"),
    nutrient("P", "Phosphorus", "kg/ha"),
    nutrient("K", "Potassium", "kg/ha"),
    NumericField {
        key: "pH",
        label: "pH",
        unit: "",
        range: Some((0.0, 14.0)),
        non_negative: true,
    },
    nutrient("EC", "Electrical conductivity", "dS/m"),
    nutrient("OC", "Organic carbon", "%"),
    nutrient("S", "Sulfur", "ppm"),
    nutrient("Zn", "Zinc", "ppm"),
    nutrient("Fe", "Iron", "ppm"),
    nutrient("Cu", "Copper", "ppm"),
    nutrient("Mn", "Manganese", "ppm"),
    nutrient("B", "Boron", "ppm"),
];

/// Body of a soil analysis request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    #[serde(rename = "EC")]
    pub electrical_conductivity: f64,
    #[serde(rename = "OC")]
    pub organic_carbon: f64,
    #[serde(rename = "S")]
    pub sulfur: f64,
    #[serde(rename = "Zn")]
    pub zinc: f64,
    #[serde(rename = "Fe")]
    pub iron: f64,
    #[serde(rename = "Cu")]
    pub copper: f64,
    #[serde(rename = "Mn")]
    pub manganese: f64,
    #[serde(rename = "B")]
    pub boron: f64,
}

impl SoilSample {
    /// Build a sample from raw form inputs ordered as [`SOIL_FEATURES`].
    pub fn from_inputs(inputs: &[String]) -> Result<Self, InputError> {
        let [n, p, k, ph, ec, oc, s, zn, fe, cu, mn, b] = parse_fields(&SOIL_FEATURES, inputs)?;
        Ok(Self {
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            ph,
            electrical_conductivity: ec,
            organic_carbon: oc,
            sulfur: s,
            zinc: zn,
            iron: fe,
            copper: cu,
            manganese: mn,
            boron: b,
        })
    }
}

/// Fertility class reported by the prediction service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fertility {
    High,
    Low,
}

impl Fertility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
        }
    }
}

/// Soil analysis response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilReport {
    pub fertility_status: Fertility,
    /// Probability of high fertility, as a percentage.
    pub confidence: f64,
}

impl SoilReport {
    /// Confidence in the reported status, as a percentage.
    pub fn certainty(&self) -> f64 {
        let score = self.confidence.clamp(0.0, 100.0);
        match self.fertility_status {
            Fertility::High => score,
            Fertility::Low => 100.0 - score,
        }
    }
}
