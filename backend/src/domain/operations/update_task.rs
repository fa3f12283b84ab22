//! Update the description or completion flag of a task.

use tracing::info;

use super::sealed::Operation;
use super::{Authorized, OperationContext};
use crate::domain::ports::AccessTarget;
use crate::domain::{Error, TaskDescription, TaskId, TaskUpdate, Token, UserId};

/// Changes an open task. Unset fields keep their stored values and
/// `last_update_date` moves to now.
///
/// Completed tasks are locked: updating one fails with
/// [`Error::UpdateCompletedTask`].
pub struct UpdateTask {
    context: OperationContext,
    task_id: TaskId,
    description: Option<String>,
    completed: Option<bool>,
}

impl UpdateTask {
    pub(super) fn new(context: OperationContext, task_id: TaskId) -> Self {
        Self {
            context,
            task_id,
            description: None,
            completed: None,
        }
    }

    /// Replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Attach the caller's session token.
    pub fn authorized_with(self, token: Token) -> Authorized<Self> {
        Authorized::new(self, token)
    }
}

impl Operation for UpdateTask {
    type Output = ();

    const NAME: &'static str = "update_task";

    fn context(&self) -> &OperationContext {
        &self.context
    }

    fn access_target(&self) -> Option<AccessTarget> {
        Some(AccessTarget::Task(self.task_id.clone()))
    }

    fn perform(self, _caller: &UserId) -> Result<Self::Output, Error> {
        let tasks = self.context.tasks();
        let current = tasks
            .read(&self.task_id)?
            .ok_or_else(|| Error::TaskNotFound {
                id: self.task_id.clone(),
            })?;
        current.ensure_updatable()?;

        let update = TaskUpdate {
            description: self.description.map(TaskDescription::new).transpose()?,
            completed: self.completed,
        };
        let updated = current.apply(update, self.context.clock().utc())?;
        info!(task_id = %updated.id(), completed = updated.is_completed(), "task updated");
        tasks.write(updated)?;
        Ok(())
    }
}
