//! HS256 JSON Web Token provider.
//!
//! Tokens are stateless: there is no revocation list, so a token stays valid
//! until its `exp` claim passes.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rms_application::{TokenClaims, TokenProvider};
use rms_core::{AppError, AppResult};
use serde_json::Value;
use tracing::debug;

/// Lifetime of a freshly issued token, in hours.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

const EXPIRY_CLAIM: &str = "exp";

/// Token provider signing claims with a shared symmetric secret.
#[derive(Clone)]
pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl JwtTokenProvider {
    /// Creates a provider issuing tokens valid for [`DEFAULT_TOKEN_TTL_HOURS`].
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, TimeDelta::hours(DEFAULT_TOKEN_TTL_HOURS))
    }

    /// Creates a provider with a custom token lifetime.
    #[must_use]
    pub fn with_ttl(secret: &str, ttl: TimeDelta) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }
}

impl TokenProvider for JwtTokenProvider {
    fn issue(&self, mut claims: TokenClaims) -> AppResult<String> {
        let expires_at = (Utc::now() + self.ttl).timestamp();
        claims.insert(EXPIRY_CLAIM.to_owned(), Value::from(expires_at));

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|error| AppError::Internal(format!("failed to sign token: {error}")))
    }

    fn verify(&self, token: &str) -> Option<TokenClaims> {
        match decode::<TokenClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(error) => {
                debug!(%error, "rejected bearer token");
                None
            }
        }
    }
}
