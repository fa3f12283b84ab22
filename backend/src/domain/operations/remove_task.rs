//! Remove a task from a list the caller owns.

use tracing::info;

use super::sealed::Operation;
use super::{Authorized, OperationContext};
use crate::domain::ports::AccessTarget;
use crate::domain::{Error, Task, TaskId, Token, UserId};

/// Deletes a task and returns the removed record.
pub struct RemoveTask {
    context: OperationContext,
    task_id: TaskId,
}

impl RemoveTask {
    pub(super) fn new(context: OperationContext, task_id: TaskId) -> Self {
        Self { context, task_id }
    }

    /// Attach the caller's session token.
    pub fn authorized_with(self, token: Token) -> Authorized<Self> {
        Authorized::new(self, token)
    }
}

impl Operation for RemoveTask {
    type Output = Task;

    const NAME: &'static str = "remove_task";

    fn context(&self) -> &OperationContext {
        &self.context
    }

    fn access_target(&self) -> Option<AccessTarget> {
        Some(AccessTarget::Task(self.task_id.clone()))
    }

    fn perform(self, _caller: &UserId) -> Result<Self::Output, Error> {
        let removed = self
            .context
            .tasks()
            .remove(&self.task_id)?
            .ok_or(Error::TaskNotFound { id: self.task_id })?;
        info!(task_id = %removed.id(), "task removed");
        Ok(removed)
    }
}
