/// Send handler - relays a validated request to the provider
use http::StatusCode;
use lambda_http::{Body, Request, Response};
use serde::Serialize;
use tracing::info;

use crate::constants::{DEFAULT_SENDER, ERR_MISSING_FIELDS, MSG_EMAIL_SENT};
use crate::context::RelayContext;
use crate::error::RelayError;
use crate::handlers::common::json_response;
use crate::models::SendEmailRequest;
use crate::services::config::RelayConfig;
use crate::services::resend::{EmailSender, ProviderEmail, ResendEmailSender};
use crate::utils::logging::{redact_email, redact_subject};

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "type")]
    pub email_type: String,
    #[serde(rename = "emailId", skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

pub async fn handle(ctx: &RelayContext, event: Request) -> Result<Response<Body>, RelayError> {
    // 1. Parse the body; a body that is not valid JSON is an internal
    //    error, not a validation error
    let request: SendEmailRequest = serde_json::from_slice(event.body().as_ref())?;

    // 2. Validate required fields
    validate_send_request(&request)?;

    let (Some(to), Some(subject), Some(html)) = (
        request.to.clone(),
        request.subject.clone(),
        request.html.clone(),
    ) else {
        return Err(RelayError::Validation(ERR_MISSING_FIELDS.to_string()));
    };

    // 3. Provider credentials, checked only after validation passes
    let config = RelayConfig::from_env()?;

    info!(
        to = %redact_email(&to.summary()),
        subject = %redact_subject(&subject),
        email_type = %request.effective_type(),
        "Relaying send request"
    );

    // 4. Forward to the provider, payload exactly as received
    let sender = ResendEmailSender::new(
        ctx.http.clone(),
        ctx.provider_base_url.clone(),
        config.api_key,
    );

    let receipt = sender
        .send(&ProviderEmail {
            from: DEFAULT_SENDER.to_string(),
            to,
            subject,
            html,
        })
        .await?;

    // 5. Report the outcome
    let response = SendEmailResponse {
        success: true,
        message: MSG_EMAIL_SENT.to_string(),
        email_type: request.effective_type().to_string(),
        email_id: receipt.id,
    };

    Ok(json_response(StatusCode::OK, &response))
}

fn validate_send_request(request: &SendEmailRequest) -> Result<(), RelayError> {
    let to_present = request.to.as_ref().is_some_and(|to| !to.is_missing());
    let subject_present = request.subject.as_ref().is_some_and(|s| !s.is_empty());
    let html_present = request.html.as_ref().is_some_and(|h| !h.is_empty());

    if !(to_present && subject_present && html_present) {
        return Err(RelayError::Validation(ERR_MISSING_FIELDS.to_string()));
    }

    Ok(())
}
