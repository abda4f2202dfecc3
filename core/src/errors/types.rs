//! Error type definitions for token management.
//!
//! Token errors are deliberately coarse: signature mismatch, malformed
//! structure, and wrong signing algorithm all surface as `InvalidToken`, so
//! error responses cannot be used as an oracle for forging tokens.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed structure, bad signature, or wrong signing algorithm
    #[error("invalid token")]
    InvalidToken,

    /// Current time is at or past the token's expiry
    #[error("token has expired")]
    TokenExpired,

    /// Current time is before the token's not-before claim
    #[error("token not yet valid")]
    TokenNotYetValid,

    /// Structurally valid token whose claims do not decode into the
    /// expected shape. Treated the same as `InvalidToken` by callers.
    #[error("invalid token claims")]
    InvalidClaims,

    /// Signing or serialization failed during issuance
    #[error("token generation failed")]
    TokenGenerationFailed,
}

/// Configuration errors raised at manager construction.
///
/// A manager cannot be built from an invalid configuration, so these are
/// fatal at startup rather than surfaced per-request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("access token secret is required")]
    MissingAccessSecret,

    #[error("refresh token secret is required")]
    MissingRefreshSecret,

    #[error("access and refresh token secrets must differ")]
    IdenticalSecrets,

    #[error("{secret} token secret must be at least {min} characters")]
    SecretTooShort { secret: &'static str, min: usize },

    #[error("{ttl} token TTL must be positive")]
    NonPositiveTtl { ttl: &'static str },

    #[error("access token TTL must be shorter than refresh token TTL")]
    TtlOrdering,
}
