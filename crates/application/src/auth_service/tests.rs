use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rms_core::{AppError, AppResult};
use serde_json::{Value, json};

use super::{AuthService, EMAIL_CLAIM, ROLE_CLAIM, TokenClaims, TokenProvider};

/// Keeps issued claims in a map keyed by an opaque counter token.
#[derive(Default)]
struct FakeTokenProvider {
    issued: Mutex<HashMap<String, TokenClaims>>,
}

impl TokenProvider for FakeTokenProvider {
    fn issue(&self, claims: TokenClaims) -> AppResult<String> {
        let mut issued = self
            .issued
            .lock()
            .map_err(|_| AppError::Internal("token map poisoned".to_owned()))?;
        let token = format!("token-{}", issued.len() + 1);
        issued.insert(token.clone(), claims);
        Ok(token)
    }

    fn verify(&self, token: &str) -> Option<TokenClaims> {
        self.issued.lock().ok()?.get(token).cloned()
    }
}

struct FailingTokenProvider;

impl TokenProvider for FailingTokenProvider {
    fn issue(&self, _claims: TokenClaims) -> AppResult<String> {
        Err(AppError::Internal("signing key unavailable".to_owned()))
    }

    fn verify(&self, _token: &str) -> Option<TokenClaims> {
        None
    }
}

/// Returns fixed claims for any token, to exercise claim parsing.
struct StaticClaimsProvider(TokenClaims);

impl TokenProvider for StaticClaimsProvider {
    fn issue(&self, _claims: TokenClaims) -> AppResult<String> {
        Ok("static".to_owned())
    }

    fn verify(&self, _token: &str) -> Option<TokenClaims> {
        Some(self.0.clone())
    }
}

fn claims_from(value: Value) -> TokenClaims {
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[test]
fn admin_email_authenticates_as_admin() {
    let service = AuthService::new(Arc::new(FakeTokenProvider::default()));

    let session = service.authenticate("admin@site.com");
    assert!(session.is_ok());
    assert_eq!(session.unwrap_or_else(|_| unreachable!()).role, "admin");
}

#[test]
fn other_email_authenticates_as_researcher() {
    let service = AuthService::new(Arc::new(FakeTokenProvider::default()));

    let session = service.authenticate("bob@site.com");
    assert!(session.is_ok());
    assert_eq!(session.unwrap_or_else(|_| unreachable!()).role, "researcher");
}

#[test]
fn issued_claims_carry_email_and_role() {
    let provider = Arc::new(FakeTokenProvider::default());
    let service = AuthService::new(provider.clone());

    let session = service
        .authenticate("Chief.Admin@site.com")
        .unwrap_or_else(|_| unreachable!());
    let claims = provider.verify(&session.token).unwrap_or_default();

    assert_eq!(claims.len(), 2);
    assert_eq!(claims.get(EMAIL_CLAIM), Some(&json!("Chief.Admin@site.com")));
    assert_eq!(claims.get(ROLE_CLAIM), Some(&json!("admin")));
}

#[test]
fn authorize_round_trips_authenticated_identity() {
    let service = AuthService::new(Arc::new(FakeTokenProvider::default()));

    let session = service
        .authenticate("bob@site.com")
        .unwrap_or_else(|_| unreachable!());
    let identity = service.authorize(&session.token);

    assert!(identity.is_some());
    let identity = identity.unwrap_or_else(|| unreachable!());
    assert_eq!(identity.email(), "bob@site.com");
    assert_eq!(identity.role(), "researcher");
}

#[test]
fn unknown_token_authorizes_to_none() {
    let service = AuthService::new(Arc::new(FakeTokenProvider::default()));
    assert!(service.authorize("not-a-token").is_none());
}

#[test]
fn claims_without_string_role_authorize_to_none() {
    let service = AuthService::new(Arc::new(StaticClaimsProvider(claims_from(json!({
        "email": "bob@site.com",
        "role": 7,
    })))));
    assert!(service.authorize("anything").is_none());

    let service = AuthService::new(Arc::new(StaticClaimsProvider(claims_from(json!({
        "role": "admin",
    })))));
    assert!(service.authorize("anything").is_none());
}

#[test]
fn foreign_roles_are_reconstructed_verbatim() {
    let service = AuthService::new(Arc::new(StaticClaimsProvider(claims_from(json!({
        "email": "visitor@site.com",
        "role": "guest",
        "exp": 0,
    })))));

    let identity = service.authorize("anything");
    assert_eq!(identity.map(|value| value.role().to_owned()).as_deref(), Some("guest"));
}

#[test]
fn signing_failure_propagates_from_authenticate() {
    let service = AuthService::new(Arc::new(FailingTokenProvider));
    assert!(matches!(
        service.authenticate("bob@site.com"),
        Err(AppError::Internal(_))
    ));
}
