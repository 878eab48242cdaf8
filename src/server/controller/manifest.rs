use axum::{http::header, response::IntoResponse};

/// Bundled web app manifest, served byte for byte.
pub const MANIFEST: &str = include_str!("../../../assets/manifest.json");

pub const MANIFEST_CONTENT_TYPE: &str = "application/manifest+json";

/// GET /manifest.webmanifest - Serve the installable web app manifest
pub async fn get_manifest() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, MANIFEST_CONTENT_TYPE)], MANIFEST)
}
