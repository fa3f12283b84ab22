//! Add a task to a list the caller owns.

use tracing::info;

use super::sealed::Operation;
use super::{Authorized, OperationContext};
use crate::domain::ports::AccessTarget;
use crate::domain::{Error, Task, TaskDescription, TaskId, TodoListId, Token, UserId};

/// Adds an open task to a list.
///
/// Obtained from [`super::TaskTracker::add_task`], which rejects ids already
/// in use. A description is required; leaving it unset fails with
/// [`Error::EmptyTaskDescription`].
pub struct AddTask {
    context: OperationContext,
    task_id: TaskId,
    todo_list_id: TodoListId,
    description: String,
}

impl AddTask {
    pub(super) fn new(context: OperationContext, task_id: TaskId, todo_list_id: TodoListId) -> Self {
        Self {
            context,
            task_id,
            todo_list_id,
            description: String::new(),
        }
    }

    /// Set the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach the caller's session token.
    pub fn authorized_with(self, token: Token) -> Authorized<Self> {
        Authorized::new(self, token)
    }
}

impl Operation for AddTask {
    type Output = ();

    const NAME: &'static str = "add_task";

    fn context(&self) -> &OperationContext {
        &self.context
    }

    fn access_target(&self) -> Option<AccessTarget> {
        Some(AccessTarget::List(self.todo_list_id.clone()))
    }

    fn perform(self, _caller: &UserId) -> Result<Self::Output, Error> {
        let description = TaskDescription::new(&self.description)?;
        let task = Task::new(
            self.task_id,
            self.todo_list_id,
            description,
            self.context.clock().utc(),
        );
        info!(task_id = %task.id(), todo_list_id = %task.todo_list_id(), "task added");
        self.context.tasks().write(task)?;
        Ok(())
    }
}
