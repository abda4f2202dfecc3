//! Token service module for session token management
//!
//! This module handles the access/refresh token pair lifecycle:
//! - Pair issuance under dual symmetric secrets with asymmetric TTLs
//! - Access and refresh token validation with a fixed error taxonomy
//! - Access-only refresh and full pair rotation
//! - Unverified claims extraction for diagnostics

pub mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{
    TokenServiceConfig, DEFAULT_ACCESS_TTL_MINUTES, DEFAULT_REFRESH_TTL_DAYS, MIN_SECRET_LENGTH,
};
pub use service::{TokenManager, TokenService};
