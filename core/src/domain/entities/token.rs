//! Token entities for JWT-based session management.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Token type reported to clients alongside every issued pair
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Default issuer written into every claim set
pub const DEFAULT_ISSUER: &str = "offera";

/// Identity of the authenticated user, supplied by the login flow.
///
/// Opaque to this crate: credential verification and user lookup happen
/// upstream; these fields are signed into the token as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User identifier, also used as the token subject
    pub user_id: String,

    /// User email address
    pub email: String,

    /// Display username
    pub username: String,

    /// Optional role, absent for regular users
    pub role: Option<String>,
}

impl Identity {
    /// Creates a new identity with no role
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            username: username.into(),
            role: None,
        }
    }

    /// Creates a new identity carrying a role
    pub fn with_role(
        user_id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::new(user_id, email, username)
        }
    }
}

/// Claims structure signed into the JWT payload.
///
/// Immutable once encoded: any change to a field requires re-issuing the
/// token. Timestamps are epoch seconds, matching the registered-claim wire
/// format expected by existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub user_id: String,

    /// User email address
    pub email: String,

    /// Display username
    pub username: String,

    /// Optional role, omitted from the payload when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issuer
    pub iss: String,

    /// Subject (equals `user_id`)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp (equals `iat`)
    pub nbf: i64,

    /// Expiration timestamp. Optional so that a payload missing it can
    /// still be represented; absence is treated as already expired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates a claim set for the given identity.
    ///
    /// # Arguments
    ///
    /// * `identity` - Identity fields to sign into the token
    /// * `issuer` - Issuer string of the minting service
    /// * `now` - Wall-clock time of issuance (also used for `nbf`)
    /// * `expires_at` - Absolute expiry of the token
    pub fn new(
        identity: &Identity,
        issuer: &str,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            username: identity.username.clone(),
            role: identity.role.clone(),
            iss: issuer.to_string(),
            sub: identity.user_id.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: Some(expires_at.timestamp()),
        }
    }

    /// Returns the identity fields carried by the claims
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }

    /// Returns the expiry as a timestamp, if the claim is present
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Checks if the claims have expired.
    ///
    /// A missing `exp` claim counts as expired, so callers holding a
    /// truncated payload fail closed.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => true,
        }
    }

    /// Returns the duration until expiry, zero or negative once expired
    pub fn time_until_expiry(&self) -> Duration {
        match self.exp {
            Some(exp) => Duration::seconds(exp - Utc::now().timestamp()),
            None => Duration::zero(),
        }
    }
}

/// Token pair returned to the client.
///
/// The manager keeps no copy: the pair has no lifecycle beyond being
/// handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token. Empty when only the access token was refreshed
    pub refresh_token: String,

    /// Absolute expiry of the access token
    pub expires_at: DateTime<Utc>,

    /// Token type, always "Bearer"
    pub token_type: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }

    /// Creates a pair carrying only a fresh access token.
    ///
    /// Used by the non-rotating refresh path: the caller keeps reusing the
    /// refresh token it already holds.
    pub fn access_only(access_token: String, expires_at: DateTime<Utc>) -> Self {
        Self::new(access_token, String::new(), expires_at)
    }
}
