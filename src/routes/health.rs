use axum::{http::StatusCode, response::IntoResponse, Json};

// Health check endpoint - lightweight, the catalog is always built before
// the listener accepts
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
