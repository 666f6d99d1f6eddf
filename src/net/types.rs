//! Wire schema for the prediction endpoint.
//!
//! Field names on the wire are Spanish (`altura`, `diametro`, `hojas`,
//! `prediccion`, `datos`, `mensaje`); the Rust side uses English names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::measurements::Measurements;

/// Request body, also echoed back under `datos` in the response.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPayload {
    #[serde(rename = "altura")]
    pub height: f64,
    #[serde(rename = "diametro")]
    pub diameter: f64,
    #[serde(rename = "hojas")]
    pub leaf_count: u64,
}

impl From<Measurements> for MeasurementPayload {
    fn from(m: Measurements) -> Self {
        Self { height: m.height, diameter: m.diameter, leaf_count: m.leaf_count }
    }
}

impl From<MeasurementPayload> for Measurements {
    fn from(p: MeasurementPayload) -> Self {
        Self { height: p.height, diameter: p.diameter, leaf_count: p.leaf_count }
    }
}

/// Response body. Only `success` is always present.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(rename = "prediccion", default)]
    pub predicted_years: Option<f64>,
    #[serde(rename = "datos", default)]
    pub echoed: Option<MeasurementPayload>,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
    /// Set when the server fell back to its demonstration predictor.
    #[serde(default)]
    pub demo: bool,
}

/// A successful prediction, ready for the result presenter.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub predicted_years: f64,
    pub echoed: Measurements,
    pub demo: bool,
}
