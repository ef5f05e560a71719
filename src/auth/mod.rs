//! Credential checking behind a provider-agnostic seam.
//!
//! The UI only sees [`Authenticator`]; swapping the hosted identity
//! provider for the local credential database is a constructor choice.

pub mod local;

use thiserror::Error;

pub use local::LocalAuthenticator;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email and password must not be empty")]
    MissingCredentials,

    #[error("'{email}' does not look like an email address")]
    BadEmail { email: String },

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,

    #[error("An account for '{email}' already exists")]
    AlreadyRegistered { email: String },

    #[error("Unknown account or wrong password")]
    InvalidCredentials,

    #[error("Credential store failure: {0}")]
    Backend(#[from] rusqlite::Error),
}

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
}

pub trait Authenticator: Send + Sync {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    fn register(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Boundary validation shared by every authenticator.
///
/// Sign-in only requires non-empty fields; registration additionally checks
/// email shape and password strength.
pub fn validate_credentials(email: &str, password: &str, registering: bool) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if registering {
        let (local, domain) = email.split_once('@').unwrap_or(("", ""));
        if local.is_empty() || !domain.contains('.') || domain.starts_with('.') {
            return Err(AuthError::BadEmail {
                email: email.to_string(),
            });
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_rejected() {
        assert!(matches!(
            validate_credentials("", "secret", false),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            validate_credentials("a@b.com", "", false),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn sign_in_skips_shape_checks() {
        assert!(validate_credentials("admin", "pw", false).is_ok());
    }

    #[test]
    fn registration_requires_email_shape() {
        assert!(matches!(
            validate_credentials("not-an-email", "longenough", true),
            Err(AuthError::BadEmail { .. })
        ));
        assert!(matches!(
            validate_credentials("a@nodot", "longenough", true),
            Err(AuthError::BadEmail { .. })
        ));
        assert!(validate_credentials("a@b.com", "longenough", true).is_ok());
    }

    #[test]
    fn registration_requires_long_password() {
        assert!(matches!(
            validate_credentials("a@b.com", "short", true),
            Err(AuthError::WeakPassword)
        ));
    }
}
