/**
 * Access Tokens
 *
 * Signed, time-limited JWTs (HS256). A token asserts a username in its `sub`
 * claim and is verified without any server-side lookup; validity is purely
 * signature plus expiry at verification time.
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};
use thiserror::Error;

/// Claims carried by a token
pub type Claims = Map<String, Value>;

/// Token creation and verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed token, or expiry in the past
    #[error("invalid or expired token: {0}")]
    Invalid(jsonwebtoken::errors::Error),

    /// Token verified but carries no usable `sub` claim
    #[error("token has no subject")]
    MissingSubject,

    #[error("failed to sign token: {0}")]
    Encoding(jsonwebtoken::errors::Error),
}

/// Issues and verifies access tokens with one shared secret
#[derive(Clone)]
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Create a manager signing with `secret`; `ttl` is the default lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock-skew allowance.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign `claims`, adding `iat` and an `exp` that is `ttl` from now
    pub fn create(&self, mut claims: Claims, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        claims.insert("iat".to_string(), Value::from(now));
        claims.insert("exp".to_string(), Value::from(now.saturating_add(ttl_secs)));

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Encoding)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }

    /// Issue a token for `subject` with the default lifetime
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let mut claims = Claims::new();
        claims.insert("sub".to_string(), Value::from(subject));
        self.create(claims, self.ttl)
    }

    /// Verify a token and extract its subject
    pub fn subject(&self, token: &str) -> Result<String, TokenError> {
        let claims = self.verify(token)?;
        match claims.get("sub").and_then(Value::as_str) {
            Some(sub) if !sub.is_empty() => Ok(sub.to_string()),
            _ => Err(TokenError::MissingSubject),
        }
    }
}
