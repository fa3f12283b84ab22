//! Fetch a single task.

use super::sealed::Operation;
use super::{Authorized, OperationContext};
use crate::domain::ports::AccessTarget;
use crate::domain::{Error, Task, TaskId, Token, UserId};

/// Reads one task from a list the caller owns.
pub struct FindTask {
    context: OperationContext,
    task_id: TaskId,
}

impl FindTask {
    pub(super) fn new(context: OperationContext, task_id: TaskId) -> Self {
        Self { context, task_id }
    }

    /// Attach the caller's session token.
    pub fn authorized_with(self, token: Token) -> Authorized<Self> {
        Authorized::new(self, token)
    }
}

impl Operation for FindTask {
    type Output = Task;

    const NAME: &'static str = "find_task";

    fn context(&self) -> &OperationContext {
        &self.context
    }

    fn access_target(&self) -> Option<AccessTarget> {
        Some(AccessTarget::Task(self.task_id.clone()))
    }

    fn perform(self, _caller: &UserId) -> Result<Self::Output, Error> {
        self.context
            .tasks()
            .read(&self.task_id)?
            .ok_or(Error::TaskNotFound { id: self.task_id })
    }
}
