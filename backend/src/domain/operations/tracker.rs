//! Service layer handing out operation builders.

use super::{
    AddTask, CreateList, FindTask, OperationContext, ReadLists, ReadTasks, RemoveTask, UpdateTask,
};
use crate::domain::{Error, TaskId, TodoListId};

/// Entry point for list and task use cases.
///
/// Creation calls check for id collisions before handing out a builder.
/// The check and the later write are separate store calls, so two racing
/// creations with one id can both pass it.
/// The check also runs before the token is validated, so an unauthenticated
/// caller can tell whether a list or task id is taken.
#[derive(Clone)]
pub struct TaskTracker {
    context: OperationContext,
}

impl TaskTracker {
    /// Create a tracker over the given collaborators.
    pub fn new(context: OperationContext) -> Self {
        Self { context }
    }

    /// Start creating a list.
    ///
    /// Fails with [`Error::TodoListAlreadyExists`] when the id is taken.
    pub fn create_list(&self, todo_list_id: TodoListId) -> Result<CreateList, Error> {
        if self.context.lists().read(&todo_list_id)?.is_some() {
            return Err(Error::TodoListAlreadyExists { id: todo_list_id });
        }
        Ok(CreateList::new(self.context.clone(), todo_list_id))
    }

    /// Start adding a task to `todo_list_id`.
    ///
    /// Fails with [`Error::TaskAlreadyExists`] when the id is taken.
    pub fn add_task(&self, task_id: TaskId, todo_list_id: TodoListId) -> Result<AddTask, Error> {
        if self.context.tasks().read(&task_id)?.is_some() {
            return Err(Error::TaskAlreadyExists { id: task_id });
        }
        Ok(AddTask::new(self.context.clone(), task_id, todo_list_id))
    }

    /// Start updating a task.
    pub fn update_task(&self, task_id: TaskId) -> UpdateTask {
        UpdateTask::new(self.context.clone(), task_id)
    }

    /// Start removing a task.
    pub fn remove_task(&self, task_id: TaskId) -> RemoveTask {
        RemoveTask::new(self.context.clone(), task_id)
    }

    /// Start reading one task.
    pub fn find_task(&self, task_id: TaskId) -> FindTask {
        FindTask::new(self.context.clone(), task_id)
    }

    /// Start reading the tasks of a list.
    pub fn read_tasks(&self, todo_list_id: TodoListId) -> ReadTasks {
        ReadTasks::new(self.context.clone(), todo_list_id)
    }

    /// Start reading the caller's lists.
    pub fn read_lists(&self) -> ReadLists {
        ReadLists::new(self.context.clone())
    }
}
