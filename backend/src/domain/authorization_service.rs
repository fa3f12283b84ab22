//! Ownership-based authorization.
//!
//! A list has exactly one owner and only the owner may act on it or on its
//! tasks. There is no sharing.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{AccessGuard, AccessTarget, EntityStore};
use crate::domain::{Error, Task, TodoList, TodoListId, UserId};

/// [`AccessGuard`] backed by the list and task stores.
#[derive(Clone)]
pub struct OwnershipAuthorizationService<L, T> {
    lists: Arc<L>,
    tasks: Arc<T>,
}

impl<L, T> OwnershipAuthorizationService<L, T> {
    /// Create a guard over the given stores.
    pub fn new(lists: Arc<L>, tasks: Arc<T>) -> Self {
        Self { lists, tasks }
    }
}

impl<L, T> OwnershipAuthorizationService<L, T>
where
    L: EntityStore<TodoList>,
    T: EntityStore<Task>,
{
    fn resolve_list(&self, target: &AccessTarget) -> Result<TodoListId, Error> {
        match target {
            AccessTarget::List(id) => Ok(id.clone()),
            AccessTarget::Task(id) => self
                .tasks
                .read(id)?
                .map(|task| task.todo_list_id().clone())
                .ok_or_else(|| Error::TaskNotFound { id: id.clone() }),
        }
    }
}

impl<L, T> AccessGuard for OwnershipAuthorizationService<L, T>
where
    L: EntityStore<TodoList>,
    T: EntityStore<Task>,
{
    fn validate_access(&self, user_id: &UserId, target: &AccessTarget) -> Result<(), Error> {
        let list_id = self.resolve_list(target)?;
        let list = self
            .lists
            .read(&list_id)?
            .ok_or(Error::TodoListNotFound { id: list_id })?;

        if !list.is_owned_by(user_id) {
            debug!(%user_id, todo_list_id = %list.id(), "access denied to foreign list");
            return Err(Error::AuthorizationFailed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{TaskDescription, TaskId};
    use crate::outbound::memory::InMemoryStore;
    use crate::test_support::fixture_timestamp;
    use rstest::{fixture, rstest};

    struct World {
        guard: OwnershipAuthorizationService<InMemoryStore<TodoList>, InMemoryStore<Task>>,
        alice: UserId,
        bob: UserId,
        alice_list: TodoListId,
        bob_list: TodoListId,
        alice_task: TaskId,
    }

    #[fixture]
    fn world() -> World {
        let lists = Arc::new(InMemoryStore::<TodoList>::new());
        let tasks = Arc::new(InMemoryStore::<Task>::new());
        let alice = UserId::random();
        let bob = UserId::random();
        let alice_list = TodoListId::random();
        let bob_list = TodoListId::random();
        let alice_task = TaskId::random();

        lists
            .write(TodoList::new(alice_list.clone(), alice.clone()))
            .expect("write list");
        lists
            .write(TodoList::new(bob_list.clone(), bob.clone()))
            .expect("write list");
        tasks
            .write(Task::new(
                alice_task.clone(),
                alice_list.clone(),
                TaskDescription::new("buy milk").expect("valid description"),
                fixture_timestamp(),
            ))
            .expect("write task");

        World {
            guard: OwnershipAuthorizationService::new(lists, tasks),
            alice,
            bob,
            alice_list,
            bob_list,
            alice_task,
        }
    }

    #[rstest]
    fn owner_may_access_own_list(world: World) {
        world
            .guard
            .validate_access(&world.alice, &AccessTarget::List(world.alice_list.clone()))
            .expect("owner access");
        world
            .guard
            .validate_access(&world.bob, &AccessTarget::List(world.bob_list.clone()))
            .expect("owner access");
    }

    #[rstest]
    fn other_users_are_rejected(world: World) {
        let err = world
            .guard
            .validate_access(&world.bob, &AccessTarget::List(world.alice_list.clone()))
            .expect_err("foreign list");
        assert_eq!(err, Error::AuthorizationFailed);
    }

    #[rstest]
    fn unknown_list_is_not_found(world: World) {
        let missing = TodoListId::random();
        let err = world
            .guard
            .validate_access(&world.alice, &AccessTarget::List(missing.clone()))
            .expect_err("missing list");
        assert_eq!(err, Error::TodoListNotFound { id: missing });
    }

    #[rstest]
    fn task_targets_resolve_through_their_list(world: World) {
        world
            .guard
            .validate_access(&world.alice, &AccessTarget::Task(world.alice_task.clone()))
            .expect("owner reaches task");

        let err = world
            .guard
            .validate_access(&world.bob, &AccessTarget::Task(world.alice_task.clone()))
            .expect_err("foreign task");
        assert_eq!(err, Error::AuthorizationFailed);
    }

    #[rstest]
    fn unknown_task_is_reported_before_ownership(world: World) {
        let missing = TaskId::random();
        let err = world
            .guard
            .validate_access(&world.bob, &AccessTarget::Task(missing.clone()))
            .expect_err("missing task");
        assert_eq!(err, Error::TaskNotFound { id: missing });
    }
}
