/// Provider client and configuration services
pub mod config;
pub mod resend;

// Re-export service traits
pub use config::RelayConfig;
pub use resend::EmailSender;
