//! HTTP request handlers.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use coordex::{InputError, MAX_INPUT_BYTES};
use tracing::{debug, info, warn};

use crate::page::INDEX_HTML;
use crate::response::{ApiError, ExtractionResponse, HealthResponse};
use crate::server::AppState;

/// Characters of the body echoed into the request log.
const PREVIEW_CHARS: usize = 80;

/// Run one extraction over the request body.
pub async fn extract_text(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ExtractionResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        warn!(%method, path = uri.path(), error = %rejection, "request body rejected");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::from(InputError::TooLarge {
                limit: MAX_INPUT_BYTES,
            })
        } else {
            ApiError::new(rejection.status(), rejection.body_text())
        }
    })?;

    info!(%method, path = uri.path(), bytes = body.len(), "extraction request");
    debug!(preview = %preview(&body), "request body");

    let options = Arc::clone(&state.options);
    let result = tokio::task::spawn_blocking(move || coordex::extract_bytes(&body, &options))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "extraction task failed");
            ApiError::internal(format!("Internal error: {e}"))
        })?
        .inspect_err(|e| warn!(error = %e, "input refused"))?;

    Ok(Json(result.into()))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The HTML test page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    debug!(%method, path = uri.path(), "method not allowed");
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed. Use POST /extract",
    )
}

pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, path = uri.path(), "unknown path");
    ApiError::new(StatusCode::NOT_FOUND, "Invalid path. Use /extract")
}

/// First few characters of a body, lossily decoded, on one line.
fn preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_short_and_single_line() {
        let body = format!("first\nsecond{}", "x".repeat(200));
        let p = preview(body.as_bytes());
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(p.starts_with("first second"));
    }

    #[test]
    fn preview_tolerates_invalid_utf8() {
        assert_eq!(preview(&[b'a', 0xff, b'b']), "a\u{fffd}b");
    }
}
