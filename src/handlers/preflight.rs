/// CORS preflight handler
use http::{StatusCode, header};
use lambda_http::{Body, Response};

use crate::constants::MSG_PREFLIGHT_OK;

/// Permissive allow-all response for browser preflight checks
///
/// Carries no `Content-Type` header; the body is the bare "ok" marker, not
/// JSON.
pub fn response() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS")
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, "*")
        .body(Body::from(MSG_PREFLIGHT_OK))
        .unwrap()
}
