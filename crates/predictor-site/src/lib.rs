//! PredictorPro estimator site: server-rendered Leptos front end with a
//! hydrating WASM client.

pub mod app;
pub mod client;
pub mod components;
pub mod pages;

/// WASM entry point. cargo-leptos builds the library for the browser with
/// the `hydrate` feature; the server never compiles this.
#[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount_to_body(app::App);
}
