use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::state::AppState;

// The catalog document is rendered once at startup; the handler only hands
// out a copy.
pub async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.catalog.document().to_owned(),
    )
}

pub async fn catalog_options() -> impl IntoResponse {
    ([(header::ALLOW, "GET, OPTIONS")], ())
}
