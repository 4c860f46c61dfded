//! Authentication collaborator seam.
//!
//! Authentication is an external concern: the UI only needs to sign in,
//! sign out, and ask who (if anyone) is signed in. The trait keeps that
//! dependency explicit instead of ambient, and the stub implementation
//! stands in until a real provider is wired up.

use std::sync::{Mutex, PoisonError};

use log::{info, warn};
use thiserror::Error;

use shared::AuthUser;

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("sign in was rejected by the authentication provider")]
    SignInRejected,
    #[error("sign out was rejected by the authentication provider")]
    SignOutRejected,
}

/// External authentication collaborator.
///
/// Contract: `current_user` returns the signed-in user or `None` when
/// unauthenticated, and `is_loading` is true while the initial session is
/// still resolving.
pub trait AuthProvider: Send + Sync {
    fn sign_in(&self) -> Result<AuthUser, AuthError>;
    fn sign_out(&self) -> Result<(), AuthError>;
    fn current_user(&self) -> Option<AuthUser>;
    fn is_loading(&self) -> bool;
}

/// In-memory stand-in for a real authentication provider.
///
/// Sign-in resolves instantly to a canned profile. The failure switch lets
/// callers exercise the rejection path without a network.
pub struct StubAuthProvider {
    user: Mutex<Option<AuthUser>>,
    fail_requests: Mutex<bool>,
}

impl StubAuthProvider {
    /// A provider with nobody signed in
    pub fn new() -> Self {
        Self {
            user: Mutex::new(None),
            fail_requests: Mutex::new(false),
        }
    }

    /// A provider with a user already signed in
    pub fn with_user(user: AuthUser) -> Self {
        Self {
            user: Mutex::new(Some(user)),
            fail_requests: Mutex::new(false),
        }
    }

    /// Make subsequent sign-in/sign-out calls fail
    pub fn set_failing(&self, failing: bool) {
        *self
            .fail_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = failing;
    }

    fn failing(&self) -> bool {
        *self
            .fail_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StubAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for StubAuthProvider {
    fn sign_in(&self) -> Result<AuthUser, AuthError> {
        if self.failing() {
            warn!("Stub auth provider rejecting sign-in");
            return Err(AuthError::SignInRejected);
        }

        let user = AuthUser {
            display_name: Some("John Doe".to_string()),
            email: "john.doe@example.com".to_string(),
            avatar_url: None,
        };
        *self.user.lock().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
        info!("Stub auth provider signed in {}", user.email);
        Ok(user)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        if self.failing() {
            warn!("Stub auth provider rejecting sign-out");
            return Err(AuthError::SignOutRejected);
        }

        *self.user.lock().unwrap_or_else(PoisonError::into_inner) = None;
        info!("Stub auth provider signed out");
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_loading(&self) -> bool {
        // The stub resolves sessions instantly
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_then_sign_out() {
        let provider = StubAuthProvider::new();
        assert!(provider.current_user().is_none());

        let user = provider.sign_in().unwrap();
        assert_eq!(user.greeting_name(), "John Doe");
        assert!(provider.current_user().is_some());

        provider.sign_out().unwrap();
        assert!(provider.current_user().is_none());
    }

    #[test]
    fn test_failure_switch_rejects_requests() {
        let provider = StubAuthProvider::new();
        provider.set_failing(true);

        assert_eq!(provider.sign_in().unwrap_err(), AuthError::SignInRejected);
        assert_eq!(provider.sign_out().unwrap_err(), AuthError::SignOutRejected);
        // Rejection leaves the session untouched
        assert!(provider.current_user().is_none());

        provider.set_failing(false);
        assert!(provider.sign_in().is_ok());
    }
}
