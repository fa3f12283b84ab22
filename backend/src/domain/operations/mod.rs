//! Operation façade: one deferred-execution request object per use case.
//!
//! Builders only accumulate fields. Nothing touches a store until
//! [`Authorized::execute`], which runs, strictly in order:
//!
//! 1. authentication of the attached token;
//! 2. authorization against the operation's target list or task, when it
//!    has one;
//! 3. the domain precondition check;
//! 4. exactly one store write or read.
//!
//! Steps 1 to 3 never mutate state, so a failure leaves the stores untouched.
//!
//! # Examples
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use todo_backend::domain::ports::Authenticator;
//! use todo_backend::domain::{TaskId, TodoListId};
//! use todo_backend::wiring::TrackerComponents;
//!
//! let components = TrackerComponents::in_memory(Arc::new(DefaultClock));
//! let authenticator = components.authenticator();
//! authenticator.create_user("alice", "secret1").unwrap();
//! let token = authenticator.sign_in("alice", "secret1").unwrap();
//!
//! let tracker = components.tracker();
//! let list = TodoListId::random();
//! tracker.create_list(list.clone()).unwrap()
//!     .authorized_with(token.clone())
//!     .execute()
//!     .unwrap();
//! tracker.add_task(TaskId::random(), list.clone()).unwrap()
//!     .with_description("buy milk")
//!     .authorized_with(token.clone())
//!     .execute()
//!     .unwrap();
//!
//! let tasks = tracker.read_tasks(list).authorized_with(token).execute().unwrap();
//! assert_eq!(tasks.len(), 1);
//! ```

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{AccessGuard, Authenticator, EntityStore};
use crate::domain::{Error, Task, TodoList, Token};

mod add_task;
mod create_list;
mod find_task;
mod read_lists;
mod read_tasks;
mod remove_task;
mod tracker;
mod update_task;

pub use add_task::AddTask;
pub use create_list::CreateList;
pub use find_task::FindTask;
pub use read_lists::ReadLists;
pub use read_tasks::ReadTasks;
pub use remove_task::RemoveTask;
pub use tracker::TaskTracker;
pub use update_task::UpdateTask;

/// Collaborators shared by every operation.
#[derive(Clone)]
pub struct OperationContext {
    tasks: Arc<dyn EntityStore<Task>>,
    lists: Arc<dyn EntityStore<TodoList>>,
    authenticator: Arc<dyn Authenticator>,
    access_guard: Arc<dyn AccessGuard>,
    clock: Arc<dyn Clock>,
}

impl OperationContext {
    /// Bundle the stores and services operations run against.
    pub fn new(
        tasks: Arc<dyn EntityStore<Task>>,
        lists: Arc<dyn EntityStore<TodoList>>,
        authenticator: Arc<dyn Authenticator>,
        access_guard: Arc<dyn AccessGuard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tasks,
            lists,
            authenticator,
            access_guard,
            clock,
        }
    }

    fn tasks(&self) -> &dyn EntityStore<Task> {
        self.tasks.as_ref()
    }

    fn lists(&self) -> &dyn EntityStore<TodoList> {
        self.lists.as_ref()
    }

    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

mod sealed {
    use super::OperationContext;
    use crate::domain::ports::AccessTarget;
    use crate::domain::{Error, UserId};

    /// Steps an operation contributes to [`super::Authorized::execute`].
    ///
    /// Lives in a private module so callers cannot run `perform` without
    /// going through authentication.
    pub trait Operation {
        type Output;

        const NAME: &'static str;

        fn context(&self) -> &OperationContext;

        fn access_target(&self) -> Option<AccessTarget>;

        fn perform(self, caller: &UserId) -> Result<Self::Output, Error>;
    }
}

use sealed::Operation;

/// An operation with the caller's token attached, ready to run.
#[must_use = "operations do nothing until executed"]
pub struct Authorized<O> {
    operation: O,
    token: Token,
}

impl<O> Authorized<O> {
    fn new(operation: O, token: Token) -> Self {
        Self { operation, token }
    }
}

impl<O: Operation> Authorized<O> {
    /// Authenticate, authorize, check preconditions, then perform the store
    /// action.
    pub fn execute(self) -> Result<O::Output, Error> {
        let Self { operation, token } = self;
        let context = operation.context();

        let caller = context.authenticator.validate(&token)?;
        if let Some(target) = operation.access_target() {
            context.access_guard.validate_access(&caller, &target)?;
        }
        debug!(operation = O::NAME, user_id = %caller, "operation authorized");

        operation.perform(&caller)
    }
}
