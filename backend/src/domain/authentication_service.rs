//! Authentication domain service.
//!
//! Token lifecycle per token: absent → active (sign-in) → absent (sign-out).
//! Tokens are random and unsigned, so every validation is a session store
//! lookup; the service itself holds no state beyond its collaborators.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{Authenticator, EntityStore};
use crate::domain::{AuthSession, Credentials, Error, Token, User, UserId, Username};

/// Session-token authenticator over a user store and a session store.
#[derive(Clone)]
pub struct AuthenticationService<U, S> {
    users: Arc<U>,
    sessions: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<U, S> AuthenticationService<U, S> {
    /// Create a service over the given stores.
    pub fn new(users: Arc<U>, sessions: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            sessions,
            clock,
        }
    }
}

impl<U, S> AuthenticationService<U, S>
where
    U: EntityStore<User>,
    S: EntityStore<AuthSession>,
{
    fn find_user(&self, username: &Username) -> Result<Option<User>, Error> {
        let mut matches = self
            .users
            .scan_by_attribute(User::USERNAME, username.as_ref())?;
        Ok(matches.pop())
    }
}

impl<U, S> Authenticator for AuthenticationService<U, S>
where
    U: EntityStore<User>,
    S: EntityStore<AuthSession>,
{
    fn create_user(&self, username: &str, password: &str) -> Result<UserId, Error> {
        let credentials = Credentials::try_from_parts(username, password)?;
        // Check-then-write: two concurrent registrations of one name can both pass.
        if self.find_user(credentials.username())?.is_some() {
            return Err(Error::UserAlreadyExists {
                username: credentials.username().to_string(),
            });
        }

        let (username, password) = credentials.into_parts();
        let user = User::new(UserId::random(), username, password);
        let user_id = user.id().clone();
        self.users.write(user)?;
        info!(%user_id, "user registered");
        Ok(user_id)
    }

    fn sign_in(&self, username: &str, password: &str) -> Result<Token, Error> {
        let credentials = Credentials::try_from_parts(username, password)?;
        let user = self
            .find_user(credentials.username())?
            .filter(|user| user.password() == credentials.password())
            .ok_or_else(|| {
                debug!("sign-in rejected");
                Error::InvalidCredentials
            })?;

        let token = Token::random();
        let session = AuthSession::new(token.clone(), user.id().clone(), self.clock.utc());
        self.sessions.write(session)?;
        info!(user_id = %user.id(), "session issued");
        Ok(token)
    }

    fn sign_out(&self, token: &Token) -> Result<(), Error> {
        match self.sessions.remove(token)? {
            Some(session) => debug!(user_id = %session.user_id(), "session revoked"),
            None => debug!("sign-out for unknown session ignored"),
        }
        Ok(())
    }

    fn validate(&self, token: &Token) -> Result<UserId, Error> {
        self.sessions
            .read(token)?
            .map(|session| session.user_id().clone())
            .ok_or_else(|| {
                debug!("token has no live session");
                Error::AuthorizationFailed
            })
    }

    fn revoke_sessions(&self, user_id: &UserId) -> Result<usize, Error> {
        let sessions = self
            .sessions
            .scan_by_attribute(AuthSession::USER_ID, user_id.as_ref())?;
        let mut revoked = 0;
        for session in sessions {
            if self.sessions.remove(session.token())?.is_some() {
                revoked += 1;
            }
        }
        info!(%user_id, revoked, "sessions revoked");
        Ok(revoked)
    }
}

#[cfg(test)]
#[path = "authentication_service_tests.rs"]
mod tests;
