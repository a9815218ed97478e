//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_resend;

use lambda_http::{Body, Request, Response};
use serde_json::Value;

/// API key the integration tests install before invoking the handler
pub const TEST_API_KEY: &str = "re_test_key";

/// Export the provider API key for the current test process
pub fn set_test_api_key() {
    unsafe {
        std::env::set_var("RESEND_API_KEY", TEST_API_KEY);
    }
}

/// Build a POST request with the given JSON body
pub fn post_request(body: Value) -> Request {
    http::Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a POST request with a raw, possibly invalid, body
pub fn raw_post_request(body: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(body))
        .unwrap()
}

/// Build an OPTIONS preflight request
pub fn options_request() -> Request {
    http::Request::builder()
        .method("OPTIONS")
        .uri("/")
        .body(Body::Empty)
        .unwrap()
}

/// Decode a handler response body as JSON
pub fn response_json(response: &Response<Body>) -> Value {
    serde_json::from_slice(response.body().as_ref()).expect("response body should be JSON")
}
