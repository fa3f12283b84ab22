//! List the caller's own lists.

use super::sealed::Operation;
use super::{Authorized, OperationContext};
use crate::domain::ports::AccessTarget;
use crate::domain::{Error, TodoList, Token, UserId};

/// Reads every list owned by the caller, in no particular order.
pub struct ReadLists {
    context: OperationContext,
}

impl ReadLists {
    pub(super) fn new(context: OperationContext) -> Self {
        Self { context }
    }

    /// Attach the caller's session token.
    pub fn authorized_with(self, token: Token) -> Authorized<Self> {
        Authorized::new(self, token)
    }
}

impl Operation for ReadLists {
    type Output = Vec<TodoList>;

    const NAME: &'static str = "read_lists";

    fn context(&self) -> &OperationContext {
        &self.context
    }

    fn access_target(&self) -> Option<AccessTarget> {
        None
    }

    fn perform(self, caller: &UserId) -> Result<Self::Output, Error> {
        Ok(self
            .context
            .lists()
            .scan_by_attribute(TodoList::OWNER, caller.as_ref())?)
    }
}
