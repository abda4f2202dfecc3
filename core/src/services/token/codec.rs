//! Stateless JWT codec: signed encoding and verified decoding of claims.
//!
//! Pure functions over (claims, secret); the service layer owns which
//! secret applies to which token class. The wire format is the standard
//! three-segment base64url JWT (`header.payload.signature`) with an
//! HMAC-SHA256 signature, so tokens issued by earlier deployments keep
//! validating.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode_header, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{TokenError, TokenResult};

/// The only signing algorithm the codec accepts
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Encodes a claim set into a signed token string.
///
/// Deterministic given identical claims: all variance comes from the
/// timestamps the caller put into `claims`.
///
/// # Arguments
///
/// * `claims` - Claim set to sign
/// * `secret` - Symmetric signing secret
///
/// # Returns
///
/// * `Ok(String)` - The signed token
/// * `Err(TokenError::TokenGenerationFailed)` - Serialization or signing failed
pub fn encode(claims: &Claims, secret: &str) -> TokenResult<String> {
    let header = Header::new(SIGNING_ALGORITHM);
    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| TokenError::TokenGenerationFailed)
}

/// Decodes and verifies a token string under the given secret.
///
/// The declared algorithm is checked before any signature work: a token
/// declaring anything but HS256 (including `"none"`) is rejected outright,
/// closing the algorithm-substitution attack class. Signature comparison
/// is constant-time inside `jsonwebtoken`. Temporal claims are checked
/// with zero leeway after the signature holds, against a single clock
/// reading taken at entry; the expiry boundary is strict, so a token is
/// rejected from its `exp` second onward, matching [`Claims::is_expired`].
///
/// # Returns
///
/// * `Ok(Claims)` - Signature and temporal claims check out
/// * `Err(TokenError)` - Classified per the error taxonomy; signature
///   mismatch and malformed structure are indistinguishable
pub fn decode(token: &str, secret: &str) -> TokenResult<Claims> {
    let now = Utc::now().timestamp();

    let header = decode_header(token).map_err(|_| TokenError::InvalidToken)?;
    if header.alg != SIGNING_ALGORITHM {
        return Err(TokenError::InvalidToken);
    }

    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &verified_validation(),
    )
    .map_err(classify)?;

    // The validity window is half-open: a token is already expired at the
    // exact `exp` second, which `jsonwebtoken` still accepts.
    if data.claims.exp.map_or(true, |exp| now >= exp) {
        return Err(TokenError::TokenExpired);
    }

    Ok(data.claims)
}

/// Parses claims without signature or temporal verification.
///
/// Diagnostic use only. The result must never feed an authorization
/// decision; the verified paths are [`decode`] and the service layer
/// built on it.
pub fn decode_unverified(token: &str) -> TokenResult<Claims> {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(classify)?;

    Ok(data.claims)
}

fn verified_validation() -> Validation {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    // Strict boundaries: `exp` in the past by any amount is expired.
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation
}

/// Narrows `jsonwebtoken` errors to the crate taxonomy so no library
/// error detail reaches callers.
fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
        _ => TokenError::InvalidToken,
    }
}
