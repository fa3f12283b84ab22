//! User data model.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

use super::entity::{Entity, IndexedAttribute, UserId};

/// Validation errors returned by [`Username::new`] and [`Password::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was missing or blank once trimmed.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Unique login name of a user, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalized = username.as_ref().trim();
        if normalized.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Opaque password value.
///
/// ## Invariants
/// - Must not be blank once trimmed.
/// - Retains caller-provided whitespace; comparisons use the verbatim value.
/// - The buffer is zeroed on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`].
    pub fn new(password: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = password.as_ref();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(raw.to_owned())))
    }

    /// Password string provided by the caller.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Registered account.
///
/// ## Invariants
/// - `username` is unique across all users; the authentication service
///   checks this before persisting.
/// - Users are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    password: Password,
}

fn username_key(user: &User) -> String {
    user.username.as_ref().to_owned()
}

const USER_INDEXES: &[IndexedAttribute<User>] =
    &[IndexedAttribute::new(User::USERNAME, username_key)];

impl User {
    /// Indexed attribute holding the username.
    pub const USERNAME: &'static str = "username";

    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, username: Username, password: Password) -> Self {
        Self {
            id,
            username,
            password,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Login name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored password.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn indexed_attributes() -> &'static [IndexedAttribute<Self>] {
        USER_INDEXES
    }
}

#[cfg(test)]
mod tests;
