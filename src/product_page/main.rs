mod page;

use std::{
    error::Error,
    sync::{Arc, OnceLock},
};

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    serve, Router,
};
use page::{get_product_page, PageState};
use showcase::{
    catalog::{HttpProductSource, ProductSource},
    signals::shutdown_signal,
    utils::{configure_tracing, env_flag, get_env_var_or},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

// Host variables
static HOST: OnceLock<String> = OnceLock::new();
static LOG_LEVEL: OnceLock<String> = OnceLock::new();
static ALLOWED_ORIGIN: OnceLock<String> = OnceLock::new();

// Page variables
static SHOW_FETCH_ERRORS: OnceLock<bool> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize env variables
    init_env();

    // Configure logging
    configure_tracing(LOG_LEVEL.get().map_or("info", String::as_str));

    let host: &str = HOST.get().map_or("127.0.0.1:3000", String::as_str);
    let origin: HeaderValue =
        HeaderValue::from_str(ALLOWED_ORIGIN.get().map_or("http://127.0.0.1:80", String::as_str))?;

    // Http client, shared by every request
    let req_client: reqwest::Client = reqwest::Client::new();

    let state: PageState<HttpProductSource> = PageState {
        source: HttpProductSource::new(req_client),
        show_fetch_errors: SHOW_FETCH_ERRORS.get().copied().unwrap_or(false),
    };

    // Build application and listen to incoming requests.
    let app: Router = build_app(state, origin);
    let listener: TcpListener = TcpListener::bind(host).await?;

    info!("Serving product page on {}", host);

    // Run the app.
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// Initialize env variables
fn init_env() {
    HOST.get_or_init(|| get_env_var_or("PRODUCT_PAGE_HOST", "127.0.0.1:3000"));
    LOG_LEVEL.get_or_init(|| get_env_var_or("LOG_LEVEL", "info"));
    ALLOWED_ORIGIN.get_or_init(|| get_env_var_or("ALLOWED_ORIGIN", "http://127.0.0.1:80"));

    SHOW_FETCH_ERRORS.get_or_init(|| env_flag(&get_env_var_or("SHOW_FETCH_ERRORS", "false")));
}

/// Builds the application.
fn build_app<S>(state: PageState<S>, origin: HeaderValue) -> Router
where
    S: ProductSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_product_page::<S>))
        .route("/products", get(get_product_page::<S>))
        .with_state(Arc::new(state))
        .layer(
            // Axum recommends to use tower::ServiceBuilder to apply multiple middleware at once, instead of repeatadly calling layer.
            // https://docs.rs/axum/latest/axum/middleware/index.html#applying-multiple-middleware
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_methods([Method::GET])
                    .allow_origin(origin),
            ),
        )
}
