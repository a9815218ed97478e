/// HTTP entry points for the relay
pub mod common;
pub mod preflight;
pub mod send;

use std::sync::Arc;

use http::Method;
use lambda_http::{Body, Error, Request, Response};
use tracing::{error, info, warn};

use crate::context::RelayContext;
use crate::error::RelayError;

/// Main Lambda handler - dispatches on method and translates every failure
/// into a JSON response; nothing propagates as an unhandled fault
pub async fn handler(ctx: Arc<RelayContext>, event: Request) -> Result<Response<Body>, Error> {
    info!("Processing request: {} {}", event.method(), event.uri());

    // CORS preflight short-circuits before any parsing
    if event.method() == Method::OPTIONS {
        return Ok(preflight::response());
    }

    match send::handle(&ctx, event).await {
        Ok(response) => Ok(response),
        Err(err) => {
            match &err {
                RelayError::Validation(_) => warn!(error = %err, "Rejected send request"),
                _ => error!(error = %err, "Relay request failed"),
            }
            Ok(err.into_response())
        }
    }
}
