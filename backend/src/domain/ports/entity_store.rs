//! Driven port for keyed, in-process entity persistence.
//!
//! One store holds one entity kind. Besides point lookups by id, stores
//! answer secondary lookups over the attributes the entity kind declares in
//! [`Entity::indexed_attributes`].

use thiserror::Error;

use crate::domain::Entity;

/// Errors raised by entity store adapters.
///
/// Every variant indicates a defect in the caller, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A secondary lookup named an attribute the entity kind does not index.
    #[error("{entity} has no indexed attribute named {name}")]
    UnknownAttribute { entity: String, name: String },
}

impl StoreError {
    /// Helper for lookups against undeclared attributes.
    pub fn unknown_attribute(entity: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            entity: entity.into(),
            name: name.into(),
        }
    }
}

/// Keyed container for one entity kind.
///
/// Each method is atomic on its own; callers composing a check with a later
/// write get no cross-call atomicity.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Insert `entity`, replacing any record stored under the same id.
    fn write(&self, entity: E) -> Result<(), StoreError>;

    /// Fetch the record stored under `id`.
    fn read(&self, id: &E::Id) -> Result<Option<E>, StoreError>;

    /// Delete and return the record stored under `id`.
    fn remove(&self, id: &E::Id) -> Result<Option<E>, StoreError>;

    /// Drop every record.
    fn clear(&self) -> Result<(), StoreError>;

    /// Every record whose attribute `name` equals `value`, in no particular
    /// order.
    ///
    /// Fails with [`StoreError::UnknownAttribute`] when `name` is not one of
    /// the entity kind's indexed attributes.
    fn scan_by_attribute(&self, name: &str, value: &str) -> Result<Vec<E>, StoreError>;
}
