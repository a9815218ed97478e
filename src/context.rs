/// Relay context - shared state for the Lambda handler
use std::sync::Arc;

use crate::constants::RESEND_API_BASE;

/// Process-lifetime resources shared across invocations
///
/// Nothing request-scoped lives here; the API key is read from the
/// environment per request so that a misconfigured deployment surfaces as a
/// structured error response instead of a startup crash.
#[derive(Clone)]
pub struct RelayContext {
    /// Outbound HTTP client, reused across warm invocations
    pub http: reqwest::Client,

    /// Base URL of the provider API
    pub provider_base_url: String,
}

impl RelayContext {
    /// Create a context pointed at the production provider endpoint
    pub fn new() -> Arc<Self> {
        Self::with_base_url(RESEND_API_BASE)
    }

    /// Create a context pointed at an arbitrary provider endpoint
    ///
    /// Integration tests use this to direct sends at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            http: reqwest::Client::new(),
            provider_base_url: base_url.into(),
        })
    }
}
