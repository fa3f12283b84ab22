//! Driving port for ownership checks.

use crate::domain::{Error, TaskId, TodoListId, UserId};

/// Resource an access check is addressed to.
///
/// Task targets resolve to the task's list before the ownership check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessTarget {
    /// A list addressed directly.
    List(TodoListId),
    /// A task, checked through the list it belongs to.
    Task(TaskId),
}

/// Decides whether a user may act on a list.
#[cfg_attr(test, mockall::automock)]
pub trait AccessGuard: Send + Sync {
    /// Succeed when `user_id` owns the list behind `target`.
    ///
    /// Fails with [`Error::TaskNotFound`] for an unknown task,
    /// [`Error::TodoListNotFound`] for an unknown list, and
    /// [`Error::AuthorizationFailed`] when another user owns the list.
    fn validate_access(&self, user_id: &UserId, target: &AccessTarget) -> Result<(), Error>;
}
