//! Mock Resend server for integration tests
//!
//! Provides a wiremock-based stand-in for the provider's send endpoint so
//! the handler can be driven end-to-end without real credentials.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct MockResendServer {
    server: MockServer,
}

impl MockResendServer {
    /// Create and start a new mock provider server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URI to hand to `RelayContext::with_base_url`
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Accept any send, returning the given message id
    pub async fn mock_send_success(&self, email_id: &str) {
        self.mock_send_response(200, json!({ "id": email_id })).await;
    }

    /// Answer every send with the given status and JSON body
    pub async fn mock_send_response(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Accept only the exact payload carrying the expected bearer credential
    pub async fn mock_send_success_strict(&self, expected_body: Value, email_id: &str) {
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("Authorization", "Bearer re_test_key"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": email_id })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer every send with a body that is not JSON
    pub async fn mock_send_garbage(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(status).set_body_string("<html>bad gateway</html>"))
            .mount(&self.server)
            .await;
    }

    /// Reject every call; the mock verifies on drop that none arrived
    pub async fn expect_no_sends(&self) {
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}
