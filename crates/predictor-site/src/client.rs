//! Browser-side glue: the settle delay, the POST to the prediction service,
//! and blocking alert dialogs.
//!
//! Estimation only runs in the browser. The native builds compile stubs so
//! the server can render the page without pulling in web APIs; the SSR pass
//! never fires an event handler.

use predictor_core::{EstimateError, EstimateResult, PredictRequest};

/// Fixed latency applied before a local estimate resolves, so the busy
/// state is visible even though the formula is instant.
pub const CALCULATION_DELAY_MS: u32 = 800;

#[cfg(target_arch = "wasm32")]
pub async fn settle_delay() {
    gloo_timers::future::TimeoutFuture::new(CALCULATION_DELAY_MS).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn settle_delay() {}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_estimate(endpoint: &str, request: &PredictRequest) -> EstimateResult<f64> {
    use predictor_core::PredictResponse;

    let response = gloo_net::http::Request::post(endpoint)
        .json(request)
        .map_err(|e| EstimateError::BackendUnavailable(e.to_string()))?
        .send()
        .await
        .map_err(|e| EstimateError::BackendUnavailable(e.to_string()))?;

    if !response.ok() {
        return Err(EstimateError::from_status(response.status()));
    }

    let body: PredictResponse = response
        .json()
        .await
        .map_err(|e| EstimateError::BackendUnavailable(e.to_string()))?;

    Ok(body.estimated_price)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_estimate(_endpoint: &str, _request: &PredictRequest) -> EstimateResult<f64> {
    Err(EstimateError::BackendUnavailable(
        "estimation requires the browser client".into(),
    ))
}

#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::warn!(alert = message, "alert suppressed outside the browser");
}
