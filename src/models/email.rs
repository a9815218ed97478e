/// Send request schema
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EMAIL_TYPE;

/// Recipient field of a send request: a single address or a list
///
/// Forwarded to the provider exactly as received; no validation or
/// normalization is applied to the addresses themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// Whether the field counts as missing for request validation
    ///
    /// An empty single address counts as missing. An empty list does not;
    /// it is forwarded as-is and left to the provider to reject.
    pub fn is_missing(&self) -> bool {
        matches!(self, Recipients::One(address) if address.is_empty())
    }

    /// Addresses joined into one string for logging (redact before emitting)
    pub fn summary(&self) -> String {
        match self {
            Recipients::One(address) => address.clone(),
            Recipients::Many(addresses) => addresses.join(", "),
        }
    }
}

/// Inbound send request
///
/// Every field deserializes as optional so that presence is checked by the
/// handler rather than rejected by serde; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailRequest {
    pub to: Option<Recipients>,
    pub subject: Option<String>,
    pub html: Option<String>,
    #[serde(rename = "type")]
    pub email_type: Option<String>,
}

impl SendEmailRequest {
    /// The classification echoed back to the caller
    pub fn effective_type(&self) -> &str {
        self.email_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_EMAIL_TYPE)
    }
}
