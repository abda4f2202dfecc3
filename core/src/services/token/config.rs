//! Configuration for the token service

use chrono::Duration;

use crate::domain::entities::token::DEFAULT_ISSUER;
use crate::errors::ConfigError;

/// Default access token lifetime
pub const DEFAULT_ACCESS_TTL_MINUTES: i64 = 15;

/// Default refresh token lifetime
pub const DEFAULT_REFRESH_TTL_DAYS: i64 = 7;

/// Minimum accepted secret length, in characters
pub const MIN_SECRET_LENGTH: usize = 32;

/// Configuration for the token service.
///
/// Validated once at service construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign and verify access tokens
    pub access_secret: String,
    /// Secret used to sign and verify refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime, strictly longer than `access_ttl`
    pub refresh_ttl: Duration,
    /// Issuer written into every claim set
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret-change-in-production".to_string(),
            refresh_secret: "development-refresh-secret-change-in-production".to_string(),
            access_ttl: Duration::minutes(DEFAULT_ACCESS_TTL_MINUTES),
            refresh_ttl: Duration::days(DEFAULT_REFRESH_TTL_DAYS),
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secrets and default TTLs
    /// and issuer.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Self::default()
        }
    }

    /// Checks that the configuration is safe to sign tokens with.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Configuration is valid
    /// * `Err(ConfigError)` - First violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::MissingAccessSecret);
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::MissingRefreshSecret);
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::IdenticalSecrets);
        }
        if self.access_secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort {
                secret: "access",
                min: MIN_SECRET_LENGTH,
            });
        }
        if self.refresh_secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort {
                secret: "refresh",
                min: MIN_SECRET_LENGTH,
            });
        }
        if self.access_ttl <= Duration::zero() {
            return Err(ConfigError::NonPositiveTtl { ttl: "access" });
        }
        if self.refresh_ttl <= Duration::zero() {
            return Err(ConfigError::NonPositiveTtl { ttl: "refresh" });
        }
        if self.access_ttl >= self.refresh_ttl {
            return Err(ConfigError::TtlOrdering);
        }
        Ok(())
    }
}
