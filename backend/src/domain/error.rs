//! Domain-level error types.
//!
//! These errors are transport agnostic. The web layer maps each
//! [`ErrorCode`] to a response status; the domain never retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::{TaskId, TodoListId};
use super::ports::StoreError;
use super::user::UserValidationError;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Username or password blank on registration or sign-in.
    EmptyCredentials,
    /// Unknown username or wrong password.
    InvalidCredentials,
    /// Username already registered.
    UserAlreadyExists,
    /// Token unknown or caller is not the resource owner.
    AuthorizationFailed,
    /// Referenced list is absent.
    TodoListNotFound,
    /// Referenced task is absent.
    TaskNotFound,
    /// List id collision on creation.
    TodoListAlreadyExists,
    /// Task id collision on creation.
    TaskAlreadyExists,
    /// Blank task description.
    EmptyTaskDescription,
    /// Attempt to modify a completed task.
    UpdateCompletedTask,
    /// Defect inside the core, never caused by caller input.
    InternalError,
}

/// Failures raised by the identity and access core.
///
/// # Examples
/// ```
/// use todo_backend::domain::{Error, ErrorCode};
///
/// assert_eq!(Error::AuthorizationFailed.code(), ErrorCode::AuthorizationFailed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Username or password blank after trimming.
    #[error("username and password must not be blank")]
    EmptyCredentials,
    /// No user matches the username, or the password differs.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The username is taken.
    #[error("user {username} already exists")]
    UserAlreadyExists { username: String },
    /// The token has no live session, or the caller does not own the target.
    #[error("authorization failed")]
    AuthorizationFailed,
    /// No list with this id exists.
    #[error("todo list {id} not found")]
    TodoListNotFound { id: TodoListId },
    /// No task with this id exists.
    #[error("task {id} not found")]
    TaskNotFound { id: TaskId },
    /// A list with this id already exists.
    #[error("todo list {id} already exists")]
    TodoListAlreadyExists { id: TodoListId },
    /// A task with this id already exists.
    #[error("task {id} already exists")]
    TaskAlreadyExists { id: TaskId },
    /// The task description is blank after trimming.
    #[error("task description must not be blank")]
    EmptyTaskDescription,
    /// The task is completed and locked against updates.
    #[error("task {id} is completed and cannot be updated")]
    UpdateCompletedTask { id: TaskId },
    /// Store adapter misuse; indicates a defect.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Stable machine-readable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyCredentials => ErrorCode::EmptyCredentials,
            Self::InvalidCredentials => ErrorCode::InvalidCredentials,
            Self::UserAlreadyExists { .. } => ErrorCode::UserAlreadyExists,
            Self::AuthorizationFailed => ErrorCode::AuthorizationFailed,
            Self::TodoListNotFound { .. } => ErrorCode::TodoListNotFound,
            Self::TaskNotFound { .. } => ErrorCode::TaskNotFound,
            Self::TodoListAlreadyExists { .. } => ErrorCode::TodoListAlreadyExists,
            Self::TaskAlreadyExists { .. } => ErrorCode::TaskAlreadyExists,
            Self::EmptyTaskDescription => ErrorCode::EmptyTaskDescription,
            Self::UpdateCompletedTask { .. } => ErrorCode::UpdateCompletedTask,
            Self::Store(_) => ErrorCode::InternalError,
        }
    }

    /// Whether the error signals a defect rather than bad input or absent state.
    pub fn is_internal(&self) -> bool {
        self.code() == ErrorCode::InternalError
    }
}

impl From<UserValidationError> for Error {
    fn from(_: UserValidationError) -> Self {
        Self::EmptyCredentials
    }
}

#[cfg(test)]
mod tests;
