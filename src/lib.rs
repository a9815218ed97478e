// Library root - exports public API

pub mod constants;
pub mod context;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use context::RelayContext;
pub use error::RelayError;
pub use handlers::handler;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
