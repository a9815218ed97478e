/// Resend email sending service
use async_trait::async_trait;
use http::header;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::constants::ERR_PROVIDER_SEND_FAILED;
use crate::error::RelayError;
use crate::models::Recipients;

/// Outbound wire payload for the provider's send endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ProviderEmail {
    pub from: String,
    pub to: Recipients,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement of an accepted send
#[derive(Debug, Clone)]
pub struct SendReceipt {
    /// Provider-assigned message identifier, when the response carries one
    pub id: Option<String>,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &ProviderEmail) -> Result<SendReceipt, RelayError>;
}

/// Resend API client
///
/// One POST per send; no retries and no client-side timeout, that policy
/// belongs to the hosting runtime.
pub struct ResendEmailSender {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ResendEmailSender {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Send endpoint URL
    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &ProviderEmail) -> Result<SendReceipt, RelayError> {
        let url = self.emails_url();

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(email)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Provider request failed");
                RelayError::Internal(e.to_string())
            })?;

        let status = response.status();

        // The body is decoded before the status check; an undecodable body
        // is an internal error regardless of status.
        let body: Value = response.json().await.map_err(|e| {
            error!(status = %status, error = %e, "Provider returned undecodable body");
            RelayError::Internal(e.to_string())
        })?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(ERR_PROVIDER_SEND_FAILED)
                .to_string();

            warn!(status = %status, error = %message, "Provider rejected send");

            return Err(RelayError::Provider {
                status: status.as_u16(),
                message,
                details: body,
            });
        }

        let id = body.get("id").and_then(Value::as_str).map(str::to_string);

        info!(email_id = ?id, "Provider accepted send");

        Ok(SendReceipt { id })
    }
}
