//! Explicit dependency construction for the in-memory backend.
//!
//! Every store and service is built once here and shared by reference, so
//! nothing relies on global state.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::operations::{OperationContext, TaskTracker};
use crate::domain::{
    AuthSession, AuthenticationService, OwnershipAuthorizationService, Task, TodoList, User,
};
use crate::outbound::memory::InMemoryStore;

/// Authenticator over the in-memory user and session stores.
pub type InMemoryAuthenticator =
    AuthenticationService<InMemoryStore<User>, InMemoryStore<AuthSession>>;

/// Access guard over the in-memory list and task stores.
pub type InMemoryAccessGuard = OwnershipAuthorizationService<InMemoryStore<TodoList>, InMemoryStore<Task>>;

/// Fully wired set of stores and services.
#[derive(Clone)]
pub struct TrackerComponents {
    users: Arc<InMemoryStore<User>>,
    sessions: Arc<InMemoryStore<AuthSession>>,
    lists: Arc<InMemoryStore<TodoList>>,
    tasks: Arc<InMemoryStore<Task>>,
    authenticator: Arc<InMemoryAuthenticator>,
    tracker: TaskTracker,
}

impl TrackerComponents {
    /// Build empty in-memory stores and the services over them.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        let users = Arc::new(InMemoryStore::<User>::new());
        let sessions = Arc::new(InMemoryStore::<AuthSession>::new());
        let lists = Arc::new(InMemoryStore::<TodoList>::new());
        let tasks = Arc::new(InMemoryStore::<Task>::new());

        let authenticator: Arc<InMemoryAuthenticator> = Arc::new(AuthenticationService::new(
            Arc::clone(&users),
            Arc::clone(&sessions),
            Arc::clone(&clock),
        ));
        let access_guard: Arc<InMemoryAccessGuard> = Arc::new(
            OwnershipAuthorizationService::new(Arc::clone(&lists), Arc::clone(&tasks)),
        );
        let context = OperationContext::new(
            tasks.clone(),
            lists.clone(),
            authenticator.clone(),
            access_guard,
            clock,
        );

        Self {
            users,
            sessions,
            lists,
            tasks,
            authenticator,
            tracker: TaskTracker::new(context),
        }
    }

    /// Registration and session service.
    pub fn authenticator(&self) -> &InMemoryAuthenticator {
        &self.authenticator
    }

    /// List and task use cases.
    pub fn tracker(&self) -> &TaskTracker {
        &self.tracker
    }

    /// User store.
    pub fn users(&self) -> &InMemoryStore<User> {
        &self.users
    }

    /// Session store.
    pub fn sessions(&self) -> &InMemoryStore<AuthSession> {
        &self.sessions
    }

    /// List store.
    pub fn lists(&self) -> &InMemoryStore<TodoList> {
        &self.lists
    }

    /// Task store.
    pub fn tasks(&self) -> &InMemoryStore<Task> {
        &self.tasks
    }
}
