//! # Offera Core
//!
//! Session token management core for the Offera task-management backend.
//! This crate owns the full lifecycle of the access/refresh token pair:
//! issuance, validation, and refresh under dual symmetric secrets with
//! asymmetric TTLs. HTTP handlers, persistence, and credential checks live
//! in other crates and consume this one through the [`TokenManager`] trait.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::{Claims, Identity, TokenPair};
pub use errors::{ConfigError, TokenError, TokenResult};
pub use services::token::{TokenManager, TokenService, TokenServiceConfig};
