//! Role labels and the rules that read them.
//!
//! Roles form an open string space. Only the two labels below grant write
//! access; anything else, `guest` included, is unprivileged.

/// Role granted to identities whose email mentions `admin`.
pub const ROLE_ADMIN: &str = "admin";

/// Role granted to every other authenticated identity.
pub const ROLE_RESEARCHER: &str = "researcher";

/// Derives a role from an email address.
///
/// This is a placeholder and performs no credential check: any caller that
/// chooses an email containing `admin` receives the admin role.
#[must_use]
pub fn role_for_email(email: &str) -> &'static str {
    if email.to_lowercase().contains(ROLE_ADMIN) {
        ROLE_ADMIN
    } else {
        ROLE_RESEARCHER
    }
}

/// Returns whether a role may create projects. Matching is exact.
#[must_use]
pub fn can_create_projects(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_RESEARCHER
}
