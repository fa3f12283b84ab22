//! To-do list aggregate.

use super::entity::{Entity, IndexedAttribute, TodoListId, UserId};

/// A list of tasks owned by exactly one user.
///
/// The owner is fixed at creation and never changes; ownership is the only
/// access-control relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    id: TodoListId,
    owner: UserId,
}

fn owner_key(list: &TodoList) -> String {
    list.owner.as_ref().to_owned()
}

const LIST_INDEXES: &[IndexedAttribute<TodoList>] =
    &[IndexedAttribute::new(TodoList::OWNER, owner_key)];

impl TodoList {
    /// Indexed attribute holding the owner id.
    pub const OWNER: &'static str = "owner";

    /// Create a list owned by `owner`.
    pub fn new(id: TodoListId, owner: UserId) -> Self {
        Self { id, owner }
    }

    /// List identifier.
    pub fn id(&self) -> &TodoListId {
        &self.id
    }

    /// Owning user.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Whether `user_id` owns this list.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }
}

impl Entity for TodoList {
    type Id = TodoListId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn indexed_attributes() -> &'static [IndexedAttribute<Self>] {
        LIST_INDEXES
    }
}
