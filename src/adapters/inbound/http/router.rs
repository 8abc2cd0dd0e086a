use axum::{
    Router,
    routing::{get, post},
};
use http::header::InvalidHeaderValue;
use std::{path::PathBuf, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::{
    handlers::{health, submit_contact},
    middleware::{cors_layer, panic_response},
};
use crate::ports::services::ContactService;

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<dyn ContactService>,
}

/// Optional surfaces around the API
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Directory holding the built site; unknown paths fall back to its `index.html`
    pub static_dir: Option<PathBuf>,
    /// Origins allowed to call the API cross-origin; empty disables CORS
    pub allowed_origins: Vec<String>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    with_common_layers(create_api_router().with_state(state))
}

/// Create the router, optionally serving the site and allowing cross-origin calls
pub fn create_router_with_options(
    state: AppState,
    options: &RouterOptions,
) -> Result<Router, InvalidHeaderValue> {
    let mut router = create_api_router().with_state(state);

    if let Some(dir) = &options.static_dir {
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    if !options.allowed_origins.is_empty() {
        router = router.layer(cors_layer(&options.allowed_origins)?);
    }

    Ok(with_common_layers(router))
}

/// Create a router with just the API endpoints
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/health", get(health))
}

fn with_common_layers(router: Router) -> Router {
    // Tracing wraps panic recovery so the 500 is traced too
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}
