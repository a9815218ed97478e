/// Common handler utilities
use http::{StatusCode, header};
use lambda_http::{Body, Response};
use serde::Serialize;

/// Builds a JSON response carrying the headers every non-preflight reply
/// includes: `Content-Type: application/json` and the permissive CORS
/// allow-origin grant
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    let payload = serde_json::to_string(body).unwrap_or_else(|_| {
        r#"{"success":false,"error":"response serialization failed"}"#.to_string()
    });

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .body(Body::from(payload))
        .unwrap()
}
