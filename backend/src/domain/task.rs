//! Task entity and its update rules.

use std::fmt;

use chrono::{DateTime, Utc};

use super::entity::{Entity, IndexedAttribute, TaskId, TodoListId};
use super::error::Error;

/// Trimmed, non-empty task description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Validate and construct a description.
    ///
    /// # Examples
    /// ```
    /// use todo_backend::domain::{Error, TaskDescription};
    ///
    /// let description = TaskDescription::new("  buy milk ").unwrap();
    /// assert_eq!(description.as_ref(), "buy milk");
    /// assert_eq!(TaskDescription::new("  "), Err(Error::EmptyTaskDescription));
    /// ```
    pub fn new(description: impl AsRef<str>) -> Result<Self, Error> {
        let trimmed = description.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyTaskDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Field changes requested for an existing task. Unset fields keep their
/// stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement description.
    pub description: Option<TaskDescription>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

/// A unit of work inside a to-do list.
///
/// ## Invariants
/// - `todo_list_id` never changes after creation.
/// - `last_update_date` starts equal to `creation_date`.
/// - Once `completed` is true the task rejects further updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    todo_list_id: TodoListId,
    description: TaskDescription,
    completed: bool,
    creation_date: DateTime<Utc>,
    last_update_date: DateTime<Utc>,
}

fn list_key(task: &Task) -> String {
    task.todo_list_id.as_ref().to_owned()
}

const TASK_INDEXES: &[IndexedAttribute<Task>] =
    &[IndexedAttribute::new(Task::TODO_LIST_ID, list_key)];

impl Task {
    /// Indexed attribute holding the parent list id.
    pub const TODO_LIST_ID: &'static str = "todo_list_id";

    /// Create an open task stamped with `now`.
    pub fn new(
        id: TaskId,
        todo_list_id: TodoListId,
        description: TaskDescription,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            todo_list_id,
            description,
            completed: false,
            creation_date: now,
            last_update_date: now,
        }
    }

    /// Task identifier.
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// List the task belongs to.
    pub fn todo_list_id(&self) -> &TodoListId {
        &self.todo_list_id
    }

    /// Task description.
    pub fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Whether the task is done.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the task was created.
    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// When the task was last changed.
    pub fn last_update_date(&self) -> DateTime<Utc> {
        self.last_update_date
    }

    /// Fail with [`Error::UpdateCompletedTask`] when the task is completed.
    pub fn ensure_updatable(&self) -> Result<(), Error> {
        if self.completed {
            return Err(Error::UpdateCompletedTask {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Produce the updated record, stamping `last_update_date` with `now`.
    pub fn apply(&self, update: TaskUpdate, now: DateTime<Utc>) -> Result<Self, Error> {
        self.ensure_updatable()?;
        let TaskUpdate {
            description,
            completed,
        } = update;
        Ok(Self {
            description: description.unwrap_or_else(|| self.description.clone()),
            completed: completed.unwrap_or(self.completed),
            last_update_date: now,
            ..self.clone()
        })
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn indexed_attributes() -> &'static [IndexedAttribute<Self>] {
        TASK_INDEXES
    }
}
