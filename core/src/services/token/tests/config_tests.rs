//! Unit tests for token service configuration validation

use chrono::Duration;

use crate::errors::ConfigError;
use crate::services::token::{TokenService, TokenServiceConfig, MIN_SECRET_LENGTH};

const ACCESS_SECRET: &str = "config-test-access-secret-0123456789abcdef";
const REFRESH_SECRET: &str = "config-test-refresh-secret-0123456789abcdef";

fn valid_config() -> TokenServiceConfig {
    TokenServiceConfig::new(ACCESS_SECRET, REFRESH_SECRET)
}

#[test]
fn test_default_config_is_valid() {
    assert_eq!(TokenServiceConfig::default().validate(), Ok(()));
}

#[test]
fn test_valid_config_passes() {
    assert_eq!(valid_config().validate(), Ok(()));
}

#[test]
fn test_empty_access_secret_rejected() {
    let mut config = valid_config();
    config.access_secret = String::new();

    assert_eq!(config.validate(), Err(ConfigError::MissingAccessSecret));
}

#[test]
fn test_empty_refresh_secret_rejected() {
    let mut config = valid_config();
    config.refresh_secret = String::new();

    assert_eq!(config.validate(), Err(ConfigError::MissingRefreshSecret));
}

#[test]
fn test_identical_secrets_rejected() {
    let config = TokenServiceConfig::new(ACCESS_SECRET, ACCESS_SECRET);

    assert_eq!(config.validate(), Err(ConfigError::IdenticalSecrets));
}

#[test]
fn test_short_secret_rejected_at_boundary() {
    // 31 characters fails, 32 passes
    let short = "a".repeat(MIN_SECRET_LENGTH - 1);
    let config = TokenServiceConfig::new(short, REFRESH_SECRET);
    assert_eq!(
        config.validate(),
        Err(ConfigError::SecretTooShort {
            secret: "access",
            min: MIN_SECRET_LENGTH
        })
    );

    let exact = "a".repeat(MIN_SECRET_LENGTH);
    let config = TokenServiceConfig::new(exact, REFRESH_SECRET);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_short_refresh_secret_rejected() {
    let config = TokenServiceConfig::new(ACCESS_SECRET, "b".repeat(MIN_SECRET_LENGTH - 1));

    assert_eq!(
        config.validate(),
        Err(ConfigError::SecretTooShort {
            secret: "refresh",
            min: MIN_SECRET_LENGTH
        })
    );
}

#[test]
fn test_non_positive_access_ttl_rejected() {
    let mut config = valid_config();
    config.access_ttl = Duration::zero();
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveTtl { ttl: "access" })
    );

    config.access_ttl = Duration::seconds(-1);
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveTtl { ttl: "access" })
    );
}

#[test]
fn test_non_positive_refresh_ttl_rejected() {
    let mut config = valid_config();
    config.refresh_ttl = Duration::zero();

    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveTtl { ttl: "refresh" })
    );
}

#[test]
fn test_access_ttl_must_be_shorter_than_refresh_ttl() {
    let mut config = valid_config();
    config.access_ttl = config.refresh_ttl;
    assert_eq!(config.validate(), Err(ConfigError::TtlOrdering));

    config.access_ttl = config.refresh_ttl + Duration::minutes(1);
    assert_eq!(config.validate(), Err(ConfigError::TtlOrdering));
}

#[test]
fn test_service_construction_rejects_invalid_config() {
    let config = TokenServiceConfig::new(ACCESS_SECRET, ACCESS_SECRET);

    assert!(matches!(
        TokenService::new(config),
        Err(ConfigError::IdenticalSecrets)
    ));
}

#[test]
fn test_service_defaults_empty_issuer() {
    let mut config = valid_config();
    config.issuer = String::new();

    let service = TokenService::new(config).unwrap();
    assert_eq!(service.issuer(), "offera");
}
