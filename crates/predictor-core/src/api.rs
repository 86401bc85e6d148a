//! Wire types for the companion prediction service.
//!
//! The service lives outside this repository: a single POST endpoint that
//! takes the raw spec values and answers with an estimated price. This
//! module only defines the payload shapes; the browser client does the
//! actual request.

use serde::{Deserialize, Serialize};

use crate::specs::{defaults, parse_or, Processor, SpecForm};

/// Default endpoint of the companion service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

/// Request body for the prediction endpoint.
///
/// Numeric fields are sent as parsed, without default substitution; only the
/// rating falls back. A blank optional field therefore parses to NaN, which
/// serializes as JSON null and is rejected by the service like any other
/// malformed payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub rating: f64,
    pub ram: f64,
    pub display: f64,
    pub camera_mp: f64,
    pub battery_capacity: f64,
    pub processor_type: Processor,
    pub card: u8,
    pub sim: u8,
}

impl PredictRequest {
    pub fn from_form(form: &SpecForm) -> Self {
        Self {
            rating: parse_or(&form.rating, defaults::RATING_REMOTE),
            ram: parse_raw(&form.ram),
            display: parse_raw(&form.display),
            camera_mp: parse_raw(&form.camera_mp),
            battery_capacity: parse_raw(&form.battery_capacity),
            processor_type: form.processor_type,
            card: form.card.flag(),
            sim: form.sim.flag(),
        }
    }
}

/// Response body from the prediction endpoint. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub estimated_price: f64,
}

fn parse_raw(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}
