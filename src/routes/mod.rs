//! HTTP route handlers and router assembly.
//!
//! - `assets`: fallback handler resolving asset requests against the catalog
//! - `catalog`: the catalog JSON endpoint
//! - `health`: health check and version endpoints

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::allow_any_origin;
use crate::state::AppState;

pub mod assets;
pub mod catalog;
pub mod health;

/// Builds the application router over an immutable [`AppState`]. Any path
/// without a named route is treated as an asset request.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/config.json",
            get(catalog::get_catalog).options(catalog::catalog_options),
        )
        .route("/healthz", get(health::healthz))
        .route("/version", get(health::version))
        .fallback(assets::serve_asset)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(allow_any_origin))
}
