/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
// ============================================================================
// Provider Constants
// ============================================================================
/// Base URL of the Resend HTTP API
pub const RESEND_API_BASE: &str = "https://api.resend.com";

/// Fixed sender address for all relayed mail
pub const DEFAULT_SENDER: &str = "onboarding@resend.dev";

/// Classification applied when the request does not carry a `type`
pub const DEFAULT_EMAIL_TYPE: &str = "notification";

/// Environment variable holding the provider API key
pub const RESEND_API_KEY_VAR: &str = "RESEND_API_KEY";

// ============================================================================
// Response Messages
// ============================================================================

/// Success message returned to the caller after the provider accepts a send
pub const MSG_EMAIL_SENT: &str = "Email sent successfully";

/// Body of the CORS preflight response
pub const MSG_PREFLIGHT_OK: &str = "ok";

// ============================================================================
// Error Messages
// ============================================================================

/// Returned when any of the required request fields is missing or empty
pub const ERR_MISSING_FIELDS: &str = "Missing required fields: to, subject, html";

/// Returned when the provider API key is absent from the environment
pub const ERR_API_KEY_NOT_CONFIGURED: &str = "RESEND_API_KEY not configured";

/// Fallback when a provider failure carries no message of its own
pub const ERR_PROVIDER_SEND_FAILED: &str = "Failed to send email";
