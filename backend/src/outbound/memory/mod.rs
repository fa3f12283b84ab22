//! In-memory store adapter.
//!
//! [`InMemoryStore`] keeps records in a `HashMap` keyed by id and maintains
//! one secondary index per attribute declared by the entity kind. Both live
//! behind a single `RwLock`, so every index reflects every completed write.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use crate::domain::Entity;
use crate::domain::ports::{EntityStore, StoreError};

type AttributeIndex<Id> = HashMap<String, HashSet<Id>>;

struct StoreState<E: Entity> {
    records: HashMap<E::Id, E>,
    indexes: HashMap<&'static str, AttributeIndex<E::Id>>,
}

impl<E: Entity> StoreState<E> {
    fn empty() -> Self {
        let indexes = E::indexed_attributes()
            .iter()
            .map(|attribute| (attribute.name(), AttributeIndex::new()))
            .collect();
        Self {
            records: HashMap::new(),
            indexes,
        }
    }

    fn index(&mut self, entity: &E) {
        for attribute in E::indexed_attributes() {
            self.indexes
                .entry(attribute.name())
                .or_default()
                .entry(attribute.key_of(entity))
                .or_default()
                .insert(entity.id().clone());
        }
    }

    fn unindex(&mut self, entity: &E) {
        for attribute in E::indexed_attributes() {
            let Some(index) = self.indexes.get_mut(attribute.name()) else {
                continue;
            };
            let key = attribute.key_of(entity);
            if let Some(ids) = index.get_mut(&key) {
                ids.remove(entity.id());
                if ids.is_empty() {
                    index.remove(&key);
                }
            }
        }
    }
}

/// Process-local [`EntityStore`] for one entity kind.
///
/// # Examples
/// ```
/// use todo_backend::domain::ports::EntityStore;
/// use todo_backend::domain::{TodoList, TodoListId, UserId};
/// use todo_backend::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::<TodoList>::new();
/// let owner = UserId::random();
/// store.write(TodoList::new(TodoListId::random(), owner.clone())).unwrap();
///
/// let owned = store.scan_by_attribute(TodoList::OWNER, owner.as_ref()).unwrap();
/// assert_eq!(owned.len(), 1);
/// ```
pub struct InMemoryStore<E: Entity> {
    state: RwLock<StoreState<E>>,
}

impl<E: Entity> InMemoryStore<E> {
    /// Create an empty store with indexes for every declared attribute.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::empty()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read_state().records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic mid-mutation cannot leave the maps half-written: each mutation
    // finishes its index updates before releasing the guard.
    fn read_state(&self) -> RwLockReadGuard<'_, StoreState<E>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState<E>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    fn write(&self, entity: E) -> Result<(), StoreError> {
        let mut state = self.write_state();
        if let Some(previous) = state.records.remove(entity.id()) {
            state.unindex(&previous);
        }
        state.index(&entity);
        trace!(id = %entity.id(), "record written");
        state.records.insert(entity.id().clone(), entity);
        Ok(())
    }

    fn read(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        Ok(self.read_state().records.get(id).cloned())
    }

    fn remove(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        let mut state = self.write_state();
        let removed = state.records.remove(id);
        if let Some(entity) = removed.as_ref() {
            state.unindex(entity);
            trace!(%id, "record removed");
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.write_state() = StoreState::empty();
        Ok(())
    }

    fn scan_by_attribute(&self, name: &str, value: &str) -> Result<Vec<E>, StoreError> {
        let state = self.read_state();
        let index = state
            .indexes
            .get(name)
            .ok_or_else(|| StoreError::unknown_attribute(std::any::type_name::<E>(), name))?;
        let matches = index
            .get(value)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.records.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }
}
