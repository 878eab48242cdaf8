use super::*;
use crate::server::controller::manifest::{get_manifest, MANIFEST};
use axum::http::header;

/// Tests that the manifest is served verbatim with the manifest content type.
///
/// Expected: 200, `application/manifest+json`, body equal to the bundled file
#[tokio::test]
async fn serves_bundled_manifest() {
    let response = get_manifest().await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/manifest+json"
    );
    assert_eq!(body_bytes(response).await, MANIFEST.as_bytes().to_vec());
}

#[test]
fn bundled_manifest_is_valid_json() {
    let manifest: Value = serde_json::from_str(MANIFEST).unwrap();

    assert_eq!(manifest["short_name"], "Tahfidz");
    assert!(manifest["icons"].as_array().is_some_and(|icons| !icons.is_empty()));
}
