pub mod auth;
pub mod chat;
pub mod environment;
pub mod error;
pub mod knowledge;
pub mod session;

// Re-export common error type
pub use error::SupportError;
