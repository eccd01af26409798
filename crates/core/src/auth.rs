use serde::{Deserialize, Serialize};

/// Identity reconstructed from a verified bearer token.
///
/// Lives only for the duration of one request; it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    email: String,
    role: String,
}

impl UserIdentity {
    /// Creates an identity from the email and role claims of a token.
    #[must_use]
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
        }
    }

    /// Returns the email the identity was issued for.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the role label carried by the token.
    #[must_use]
    pub fn role(&self) -> &str {
        self.role.as_str()
    }
}
