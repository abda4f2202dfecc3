//! Error types for token and configuration failures.

mod types;

// Re-export all error types
pub use types::{ConfigError, TokenError};

/// Convenience alias for token operations
pub type TokenResult<T> = Result<T, TokenError>;
