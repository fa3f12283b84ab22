//! List the tasks of one list.

use super::sealed::Operation;
use super::{Authorized, OperationContext};
use crate::domain::ports::AccessTarget;
use crate::domain::{Error, Task, TodoListId, Token, UserId};

/// Reads every task of a list the caller owns, in no particular order.
pub struct ReadTasks {
    context: OperationContext,
    todo_list_id: TodoListId,
}

impl ReadTasks {
    pub(super) fn new(context: OperationContext, todo_list_id: TodoListId) -> Self {
        Self {
            context,
            todo_list_id,
        }
    }

    /// Attach the caller's session token.
    pub fn authorized_with(self, token: Token) -> Authorized<Self> {
        Authorized::new(self, token)
    }
}

impl Operation for ReadTasks {
    type Output = Vec<Task>;

    const NAME: &'static str = "read_tasks";

    fn context(&self) -> &OperationContext {
        &self.context
    }

    fn access_target(&self) -> Option<AccessTarget> {
        Some(AccessTarget::List(self.todo_list_id.clone()))
    }

    fn perform(self, _caller: &UserId) -> Result<Self::Output, Error> {
        Ok(self
            .context
            .tasks()
            .scan_by_attribute(Task::TODO_LIST_ID, self.todo_list_id.as_ref())?)
    }
}
