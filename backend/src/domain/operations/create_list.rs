//! Create a list owned by the caller.

use tracing::info;

use super::sealed::Operation;
use super::{Authorized, OperationContext};
use crate::domain::ports::AccessTarget;
use crate::domain::{Error, TodoList, TodoListId, Token, UserId};

/// Creates a list; the caller becomes its owner.
///
/// Obtained from [`super::TaskTracker::create_list`], which rejects ids
/// already in use.
pub struct CreateList {
    context: OperationContext,
    todo_list_id: TodoListId,
}

impl CreateList {
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

impl Operation for CreateList {
    type Output = ();

    const NAME: &'static str = "create_list";

    fn context(&self) -> &OperationContext {
        &self.context
    }

    fn access_target(&self) -> Option<AccessTarget> {
        None
    }

    fn perform(self, caller: &UserId) -> Result<Self::Output, Error> {
        let list = TodoList::new(self.todo_list_id, caller.clone());
        info!(todo_list_id = %list.id(), owner = %caller, "todo list created");
        self.context.lists().write(list)?;
        Ok(())
    }
}
