//! PredictorPro Estimator Site
//!
//! Server binary: renders the page, serves the hydration bundle and static
//! assets.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use predictor_site::app::App;
    use tower_http::{services::ServeDir, trace::TraceLayer};
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "predictor_site=debug,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).await.unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Estimator site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

/// Serve a static file from the site root when one matches the request,
/// falling back to rendering the app shell. leptos_axum 0.6 does not bundle
/// this handler (it arrived in later releases), so the standard cargo-leptos
/// implementation lives here.
#[cfg(feature = "ssr")]
async fn file_and_error_handler(
    uri: axum::http::Uri,
    axum::extract::State(options): axum::extract::State<leptos::LeptosOptions>,
    req: axum::http::Request<axum::body::Body>,
) -> axum::response::Response {
    use axum::response::IntoResponse;

    let root = options.site_root.clone();

    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == axum::http::StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler =
                leptos_axum::render_app_to_stream(options.to_owned(), predictor_site::app::App);
            handler(req).await.into_response()
        }
        Err(err) => err.into_response(),
    }
}

#[cfg(feature = "ssr")]
async fn get_static_file(
    uri: axum::http::Uri,
    root: &str,
) -> Result<axum::response::Response, (axum::http::StatusCode, String)> {
    use axum::response::IntoResponse;
    use tower_http::services::ServeDir;

    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    match ServeDir::new(root).try_call(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The server only exists with the ssr feature; the browser enters
    // through `predictor_site::hydrate` instead.
}
