//! PredictorPro Core Library
//!
//! Everything the estimator page needs that is not DOM glue: the raw form
//! state, the linear pricing formula and its adjustment factors, currency
//! formatting, and the wire types for the companion prediction service.

pub mod api;
pub mod currency;
pub mod estimator;
pub mod specs;

use thiserror::Error;

pub use api::{PredictRequest, PredictResponse};
pub use currency::Currency;
pub use estimator::{estimate, Formula};
pub use specs::{MemoryCard, PhoneSpecs, Processor, SimSupport, SpecForm};

#[derive(Error, Debug)]
pub enum EstimateError {
    /// Remote mode refuses to submit while required fields are blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The prediction service could not be reached, rejected the payload,
    /// or answered with something other than a price.
    #[error("Prediction service unavailable: {0}")]
    BackendUnavailable(String),
}

impl EstimateError {
    /// Classify a non-success HTTP status from the prediction service.
    pub fn from_status(status: u16) -> Self {
        Self::BackendUnavailable(format!("HTTP {status}"))
    }
}

pub type EstimateResult<T> = Result<T, EstimateError>;

/// Which engine answers when the user asks for a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateMode {
    /// Run the built-in formula in the page after a short settling delay.
    Local,
    /// POST the raw specs to the companion prediction service.
    Remote,
}

/// Build-time estimator configuration.
///
/// The page is rendered on the server and hydrated in the browser, and both
/// binaries must agree on the variant in use, so these knobs are compiled in
/// rather than read at runtime. Override with `PREDICTOR_MODE`,
/// `PREDICTOR_FORMULA`, `PREDICTOR_CURRENCY` and `PREDICTOR_API` when
/// building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    /// Local formula or remote delegation
    pub mode: EstimateMode,
    /// Which terms enter the base score
    pub formula: Formula,
    /// Display currency for the estimate
    pub currency: Currency,
    /// Prediction service endpoint (remote mode only)
    pub endpoint: &'static str,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            mode: EstimateMode::Local,
            formula: Formula::RatingWeighted,
            currency: Currency::Inr,
            endpoint: api::DEFAULT_ENDPOINT,
        }
    }
}

impl EstimatorConfig {
    /// Configuration baked in at compile time, falling back to the local
    /// rating-weighted INR estimator.
    pub fn from_build_env() -> Self {
        let base = Self::default();
        Self {
            mode: match option_env!("PREDICTOR_MODE") {
                Some("remote") => EstimateMode::Remote,
                Some("local") => EstimateMode::Local,
                _ => base.mode,
            },
            formula: match option_env!("PREDICTOR_FORMULA") {
                Some("specs-only") => Formula::SpecsOnly,
                Some("rating-weighted") => Formula::RatingWeighted,
                _ => base.formula,
            },
            currency: match option_env!("PREDICTOR_CURRENCY") {
                Some("usd") => Currency::Usd,
                Some("inr") => Currency::Inr,
                _ => base.currency,
            },
            endpoint: option_env!("PREDICTOR_API").unwrap_or(api::DEFAULT_ENDPOINT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EstimatorConfig::default();
        assert_eq!(config.mode, EstimateMode::Local);
        assert_eq!(config.formula, Formula::RatingWeighted);
        assert_eq!(config.currency, Currency::Inr);
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/predict");
    }

    #[test]
    fn test_missing_fields_message() {
        let err = EstimateError::MissingFields(vec!["RAM", "battery capacity"]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: RAM, battery capacity"
        );
    }

    #[test]
    fn test_status_maps_to_backend_error() {
        let err = EstimateError::from_status(503);
        assert_eq!(err.to_string(), "Prediction service unavailable: HTTP 503");
    }
}
