use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fallback handler: resolves the request path against the catalog's public
/// paths and streams the matched file's bytes.
///
/// The query string is not part of the match. The path is percent-decoded
/// first, so a `src` containing spaces is reachable from a browser.
pub async fn serve_asset(State(state): State<AppState>, uri: Uri) -> AppResult<Response> {
    let decoded = urlencoding::decode(uri.path())
        .map_err(|err| anyhow::anyhow!("undecodable request path {:?}: {}", uri.path(), err))?;

    let Some(local) = state.catalog.resolve(decoded.as_ref(), &state.config.assets.root) else {
        tracing::debug!("no catalog entry matches {}", decoded);
        return Err(AppError::NotFound);
    };

    match tokio::fs::read(&local).await {
        Ok(bytes) => {
            tracing::debug!("served {} from {}", decoded, local.display());
            Ok((StatusCode::OK, bytes).into_response())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("catalog entry {} points at missing file {}", decoded, local.display());
            Err(AppError::NotFound)
        }
        Err(err) => Err(err.into()),
    }
}
