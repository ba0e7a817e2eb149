//! Manifest Route
//!
//! - GET /manifest.json - The installable-app manifest

use axum::http::header;
use axum::response::IntoResponse;

use crate::manifest::RAW_MANIFEST;

/// GET /manifest.json
///
/// Serves the embedded manifest verbatim. The copy was validated at
/// startup, so no check happens per request.
pub async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        RAW_MANIFEST,
    )
}
