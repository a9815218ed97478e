/// Data models for the mail relay
pub mod email;

// Re-export commonly used types
pub use email::*;
