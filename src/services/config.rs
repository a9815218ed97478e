/// Configuration service - loads provider credentials from environment variables
use crate::constants::{ERR_API_KEY_NOT_CONFIGURED, RESEND_API_KEY_VAR};
use crate::error::RelayError;

/// Request-scoped provider configuration
///
/// Read per request rather than at startup so a missing credential comes
/// back to the caller as a structured 500 instead of a failed cold start.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bearer credential for the provider API
    pub api_key: String,
}

impl RelayConfig {
    /// Read configuration from the environment
    ///
    /// An empty value counts as absent.
    pub fn from_env() -> Result<Self, RelayError> {
        let api_key = std::env::var(RESEND_API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RelayError::Config(ERR_API_KEY_NOT_CONFIGURED.to_string()))?;

        Ok(Self { api_key })
    }
}
