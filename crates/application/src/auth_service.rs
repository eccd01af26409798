//! Token-based authentication ports and application service.
//!
//! Login is a placeholder: the role comes from the shape of the email
//! address and no credential is checked. Verification failures of any kind
//! are an expected outcome and surface as `None`, never as errors.

use std::sync::Arc;

use rms_core::{AppResult, UserIdentity};
use rms_domain::role_for_email;
use serde_json::{Map, Value};

/// Claim mapping embedded in a bearer token.
pub type TokenClaims = Map<String, Value>;

/// Claim carrying the identity email.
pub const EMAIL_CLAIM: &str = "email";

/// Claim carrying the identity role.
pub const ROLE_CLAIM: &str = "role";

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Port for signed, expiring bearer tokens.
pub trait TokenProvider: Send + Sync {
    /// Signs the claims together with an expiration timestamp.
    fn issue(&self, claims: TokenClaims) -> AppResult<String>;

    /// Returns the decoded claims, or `None` when the token is expired,
    /// malformed, or signed with another key.
    fn verify(&self, token: &str) -> Option<TokenClaims>;
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Token and resolved role returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    /// Signed bearer token.
    pub token: String,
    /// Role embedded in the token.
    pub role: String,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service translating emails into tokens and tokens into identities.
#[derive(Clone)]
pub struct AuthService {
    token_provider: Arc<dyn TokenProvider>,
}

impl AuthService {
    /// Creates an auth service from a token provider implementation.
    #[must_use]
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self { token_provider }
    }

    /// Resolves a role for the email and mints a token for it.
    pub fn authenticate(&self, email: &str) -> AppResult<AuthenticatedSession> {
        let role = role_for_email(email);

        let mut claims = TokenClaims::new();
        claims.insert(EMAIL_CLAIM.to_owned(), Value::String(email.to_owned()));
        claims.insert(ROLE_CLAIM.to_owned(), Value::String(role.to_owned()));

        let token = self.token_provider.issue(claims)?;

        Ok(AuthenticatedSession {
            token,
            role: role.to_owned(),
        })
    }

    /// Reconstructs the identity behind a bearer token.
    #[must_use]
    pub fn authorize(&self, token: &str) -> Option<UserIdentity> {
        let claims = self.token_provider.verify(token)?;
        let email = claims.get(EMAIL_CLAIM)?.as_str()?;
        let role = claims.get(ROLE_CLAIM)?.as_str()?;

        Some(UserIdentity::new(email, role))
    }
}

#[cfg(test)]
mod tests;
