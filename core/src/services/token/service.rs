//! Main token service implementation

use chrono::Utc;

use crate::domain::entities::token::{Claims, Identity, TokenPair, DEFAULT_ISSUER};
use crate::errors::{ConfigError, TokenResult};

use super::codec;
use super::config::TokenServiceConfig;

/// Token pair lifecycle operations consumed by the authentication flow.
///
/// The HTTP layer (login handler, refresh handler, auth middleware)
/// depends on this trait rather than on [`TokenService`] directly, so
/// handler tests can substitute a mock.
pub trait TokenManager: Send + Sync {
    /// Issues a paired access and refresh token for the given identity
    fn issue_pair(&self, identity: &Identity) -> TokenResult<TokenPair>;

    /// Validates an access token and returns its claims
    fn validate_access_token(&self, token: &str) -> TokenResult<Claims>;

    /// Validates a refresh token and returns its claims
    fn validate_refresh_token(&self, token: &str) -> TokenResult<Claims>;

    /// Mints a new access token from a valid refresh token, without
    /// rotating the refresh token
    fn refresh_access_token(&self, refresh_token: &str) -> TokenResult<TokenPair>;

    /// Mints a full new pair from a valid refresh token, rotating the
    /// refresh token as well
    fn refresh_token_pair(&self, refresh_token: &str) -> TokenResult<TokenPair>;

    /// Parses claims without any verification. Diagnostic use only; never
    /// authorize anything with the result
    fn extract_claims_unverified(&self, token: &str) -> TokenResult<Claims>;
}

/// Service managing the access/refresh token pair lifecycle.
///
/// Owns the two signing secrets, the two TTLs, and the issuer identity.
/// Every operation is a pure function of its inputs and the immutable
/// configuration, so a single instance is safe to share across threads
/// without synchronization.
pub struct TokenService {
    config: TokenServiceConfig,
}

impl TokenService {
    /// Creates a new token service instance.
    ///
    /// An empty issuer falls back to the service default before
    /// validation; every other constraint is enforced strictly.
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` or the first violated configuration constraint
    pub fn new(mut config: TokenServiceConfig) -> Result<Self, ConfigError> {
        if config.issuer.is_empty() {
            config.issuer = DEFAULT_ISSUER.to_string();
        }
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the issuer written into every claim set
    pub fn issuer(&self) -> &str {
        &self.config.issuer
    }

    /// Issues a paired access and refresh token for the given identity.
    ///
    /// Both claim sets carry the same identity and issuer and share a
    /// single wall-clock reading; they differ only in expiry and signing
    /// secret.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens plus the access token's expiry
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue_pair(&self, identity: &Identity) -> TokenResult<TokenPair> {
        let now = Utc::now();
        let access_expires_at = now + self.config.access_ttl;
        let refresh_expires_at = now + self.config.refresh_ttl;

        let access_claims = Claims::new(identity, &self.config.issuer, now, access_expires_at);
        let access_token = codec::encode(&access_claims, &self.config.access_secret)?;

        let refresh_claims = Claims::new(identity, &self.config.issuer, now, refresh_expires_at);
        let refresh_token = codec::encode(&refresh_claims, &self.config.refresh_secret)?;

        tracing::debug!(
            user_id = %identity.user_id,
            event = "token_pair_issued",
            expires_at = %access_expires_at,
            "Issued access/refresh token pair"
        );

        Ok(TokenPair::new(access_token, refresh_token, access_expires_at))
    }

    /// Validates an access token and returns the claims.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Token is authentic and within its validity window
    /// * `Err(TokenError)` - `TokenExpired`, `TokenNotYetValid`, or
    ///   `InvalidToken`; forgery and corruption are indistinguishable
    pub fn validate_access_token(&self, token: &str) -> TokenResult<Claims> {
        codec::decode(token, &self.config.access_secret).map_err(|err| {
            tracing::debug!(event = "access_token_rejected", reason = %err, "Access token rejected");
            err
        })
    }

    /// Validates a refresh token and returns the claims
    pub fn validate_refresh_token(&self, token: &str) -> TokenResult<Claims> {
        codec::decode(token, &self.config.refresh_secret).map_err(|err| {
            tracing::debug!(event = "refresh_token_rejected", reason = %err, "Refresh token rejected");
            err
        })
    }

    /// Mints a new access token from a valid refresh token.
    ///
    /// The returned pair carries an empty `refresh_token`: the caller
    /// keeps reusing the refresh token it already holds. Use
    /// [`refresh_token_pair`](Self::refresh_token_pair) when the refresh
    /// token should rotate too.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Fresh access token, empty refresh field
    /// * `Err(TokenError)` - Whatever refresh validation produced
    pub fn refresh_access_token(&self, refresh_token: &str) -> TokenResult<TokenPair> {
        let claims = self.validate_refresh_token(refresh_token)?;
        let identity = claims.identity();

        let now = Utc::now();
        let expires_at = now + self.config.access_ttl;
        let access_claims = Claims::new(&identity, &self.config.issuer, now, expires_at);
        let access_token = codec::encode(&access_claims, &self.config.access_secret)?;

        tracing::debug!(
            user_id = %identity.user_id,
            event = "access_token_refreshed",
            expires_at = %expires_at,
            "Refreshed access token"
        );

        Ok(TokenPair::access_only(access_token, expires_at))
    }

    /// Mints a full new pair from a valid refresh token, rotating the
    /// refresh token as well.
    pub fn refresh_token_pair(&self, refresh_token: &str) -> TokenResult<TokenPair> {
        let claims = self.validate_refresh_token(refresh_token)?;
        self.issue_pair(&claims.identity())
    }

    /// Parses claims from a token without any signature or temporal check.
    ///
    /// Diagnostic use only (logging, support tooling). The result proves
    /// nothing about who produced the token; authorization must go through
    /// [`validate_access_token`](Self::validate_access_token) or
    /// [`validate_refresh_token`](Self::validate_refresh_token).
    pub fn extract_claims_unverified(&self, token: &str) -> TokenResult<Claims> {
        codec::decode_unverified(token)
    }
}

impl TokenManager for TokenService {
    fn issue_pair(&self, identity: &Identity) -> TokenResult<TokenPair> {
        TokenService::issue_pair(self, identity)
    }

    fn validate_access_token(&self, token: &str) -> TokenResult<Claims> {
        TokenService::validate_access_token(self, token)
    }

    fn validate_refresh_token(&self, token: &str) -> TokenResult<Claims> {
        TokenService::validate_refresh_token(self, token)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> TokenResult<TokenPair> {
        TokenService::refresh_access_token(self, refresh_token)
    }

    fn refresh_token_pair(&self, refresh_token: &str) -> TokenResult<TokenPair> {
        TokenService::refresh_token_pair(self, refresh_token)
    }

    fn extract_claims_unverified(&self, token: &str) -> TokenResult<Claims> {
        TokenService::extract_claims_unverified(self, token)
    }
}
