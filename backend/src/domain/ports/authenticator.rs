//! Driving port for registration and session use-cases.
//!
//! Callers depend on this trait instead of the concrete service so that
//! operation tests can substitute a double.

use crate::domain::{Error, Token, UserId};

/// Issues, validates and revokes session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait Authenticator: Send + Sync {
    /// Register a user. Callers sign in separately.
    ///
    /// Fails with [`Error::EmptyCredentials`] or [`Error::UserAlreadyExists`].
    fn create_user(&self, username: &str, password: &str) -> Result<UserId, Error>;

    /// Check credentials and mint a new session token.
    ///
    /// Fails with [`Error::EmptyCredentials`] or [`Error::InvalidCredentials`].
    fn sign_in(&self, username: &str, password: &str) -> Result<Token, Error>;

    /// Remove the session for `token`. Unknown tokens are ignored.
    fn sign_out(&self, token: &Token) -> Result<(), Error>;

    /// Resolve `token` to the user holding the session.
    ///
    /// Fails with [`Error::AuthorizationFailed`] when no session is live.
    fn validate(&self, token: &Token) -> Result<UserId, Error>;

    /// Remove every session held by `user_id`, returning how many were live.
    fn revoke_sessions(&self, user_id: &UserId) -> Result<usize, Error>;
}
