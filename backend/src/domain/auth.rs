//! Authentication primitives: credentials, session tokens and sessions.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a caller talks to a port or service.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, IdValidationError, IndexedAttribute, UserId};
use super::user::{Password, UserValidationError, Username};

/// Opaque session credential presented on every authenticated call.
///
/// Any non-blank string without surrounding whitespace is accepted so that
/// unknown tokens reach the session lookup and fail there. Minted tokens
/// are random UUID v4 strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Wrap a caller-supplied token value.
    pub fn new(token: impl Into<String>) -> Result<Self, IdValidationError> {
        let raw = token.into();
        if raw.trim().is_empty() {
            return Err(IdValidationError::Empty { kind: "token" });
        }
        if raw.trim() != raw {
            return Err(IdValidationError::SurroundingWhitespace { kind: "token" });
        }
        Ok(Self(raw))
    }

    /// Mint a fresh random token.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl TryFrom<String> for Token {
    type Error = IdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl EntityId for Token {}

/// Validated login credentials used by the authentication service.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` must not be blank but retains caller-provided whitespace to
///   avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use todo_backend::domain::Credentials;
///
/// let creds = Credentials::try_from_parts(" admin ", "password").unwrap();
/// assert_eq!(creds.username().as_ref(), "admin");
/// assert_eq!(creds.password().expose(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Username suitable for user lookups.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Split into owned parts.
    pub fn into_parts(self) -> (Username, Password) {
        (self.username, self.password)
    }
}

/// Live binding from a [`Token`] to the user who signed in.
///
/// Sessions have no time-based expiry; only sign-out removes them.
/// `issued_at` is kept for auditing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    token: Token,
    user_id: UserId,
    issued_at: DateTime<Utc>,
}

fn session_user_key(session: &AuthSession) -> String {
    session.user_id.as_ref().to_owned()
}

const SESSION_INDEXES: &[IndexedAttribute<AuthSession>] =
    &[IndexedAttribute::new(AuthSession::USER_ID, session_user_key)];

impl AuthSession {
    /// Indexed attribute holding the owning user id.
    pub const USER_ID: &'static str = "user_id";

    /// Bind `token` to `user_id`.
    pub fn new(token: Token, user_id: UserId, issued_at: DateTime<Utc>) -> Self {
        Self {
            token,
            user_id,
            issued_at,
        }
    }

    /// Session token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// User the session authenticates.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// When the session was issued.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl Entity for AuthSession {
    type Id = Token;

    fn id(&self) -> &Self::Id {
        &self.token
    }

    fn indexed_attributes() -> &'static [IndexedAttribute<Self>] {
        SESSION_INDEXES
    }
}
