//! Identity primitives shared by every stored record.
//!
//! Each record carries exactly one [`EntityId`]. Equality and hashing of an
//! identifier depend only on the wrapped string, so identifiers parsed from
//! the same text are interchangeable as map keys.
//!
//! Entity kinds also declare the attributes stores should index for
//! secondary lookups (for example the owner of a list). Stores build those
//! indexes from [`Entity::indexed_attributes`] instead of inspecting fields at
//! runtime.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// Validation errors raised when parsing identifiers from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdValidationError {
    /// The identifier was empty or only whitespace.
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    /// The identifier carried leading or trailing whitespace.
    #[error("{kind} must not contain surrounding whitespace")]
    SurroundingWhitespace { kind: &'static str },
    /// The identifier is not a UUID string.
    #[error("{kind} must be a valid UUID")]
    InvalidUuid { kind: &'static str },
}

/// Marker for identifier value types used as store keys.
pub trait EntityId:
    Clone + Eq + Hash + fmt::Debug + fmt::Display + AsRef<str> + Send + Sync + 'static
{
}

/// Named secondary-index definition for an entity kind.
///
/// `key` extracts the attribute value the index groups records by.
pub struct IndexedAttribute<E> {
    name: &'static str,
    key: fn(&E) -> String,
}

impl<E> IndexedAttribute<E> {
    /// Declare an indexed attribute.
    pub const fn new(name: &'static str, key: fn(&E) -> String) -> Self {
        Self { name, key }
    }

    /// Attribute name used by [`crate::domain::ports::EntityStore::scan_by_attribute`].
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Attribute value for `entity`.
    pub fn key_of(&self, entity: &E) -> String {
        (self.key)(entity)
    }
}

impl<E> Clone for IndexedAttribute<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for IndexedAttribute<E> {}

impl<E> fmt::Debug for IndexedAttribute<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedAttribute")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A stored record identified by exactly one [`EntityId`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type for this entity kind.
    type Id: EntityId;

    /// Stable identifier, assigned at construction.
    fn id(&self) -> &Self::Id;

    /// Attributes stores maintain secondary indexes for.
    fn indexed_attributes() -> &'static [IndexedAttribute<Self>] {
        &[]
    }
}

/// Validate UUID-shaped identifier input shared by the generated id types.
fn validate_uuid(kind: &'static str, id: &str) -> Result<(), IdValidationError> {
    if id.trim().is_empty() {
        return Err(IdValidationError::Empty { kind });
    }
    if id.trim() != id {
        return Err(IdValidationError::SurroundingWhitespace { kind });
    }
    uuid::Uuid::parse_str(id).map_err(|_| IdValidationError::InvalidUuid { kind })?;
    Ok(())
}

macro_rules! define_entity_id {
    ($(#[$outer:meta])* $name:ident, $kind:literal) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Validate and construct a [`", stringify!($name), "`] from borrowed input.")]
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
                Self::from_owned(id.as_ref().to_owned())
            }

            #[doc = concat!("Generate a new random [`", stringify!($name), "`].")]
            pub fn random() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            fn from_owned(id: String) -> Result<Self, IdValidationError> {
                validate_uuid($kind, &id)?;
                Ok(Self(id))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_owned(value)
            }
        }

        impl EntityId for $name {}
    };
}

define_entity_id!(
    /// Stable user identifier stored as a UUID string.
    UserId,
    "user id"
);

define_entity_id!(
    /// Identifier of a to-do list.
    TodoListId,
    "todo list id"
);

define_entity_id!(
    /// Identifier of a task.
    TaskId,
    "task id"
);

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::collections::HashSet;

    use super::*;
    use rstest::rstest;

    const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[rstest]
    #[case("", IdValidationError::Empty { kind: "task id" })]
    #[case("   ", IdValidationError::Empty { kind: "task id" })]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", IdValidationError::SurroundingWhitespace { kind: "task id" })]
    #[case("not-a-uuid", IdValidationError::InvalidUuid { kind: "task id" })]
    fn task_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: IdValidationError) {
        let err = TaskId::new(raw).expect_err("invalid id must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn ids_compare_by_wrapped_value() {
        let first = TodoListId::new(VALID_ID).expect("valid id");
        let second = TodoListId::new(VALID_ID).expect("valid id");
        assert_eq!(first, second);

        let set: HashSet<_> = [first, second].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn random_ids_are_distinct_and_parseable() {
        let first = UserId::random();
        let second = UserId::random();
        assert_ne!(first, second);
        assert_eq!(UserId::new(first.as_ref()).expect("round trip"), first);
    }

    #[rstest]
    fn ids_deserialise_through_validation() {
        let err = serde_json::from_str::<TaskId>("\"nope\"").expect_err("invalid uuid");
        assert!(err.to_string().contains("valid UUID"));

        let id: TaskId = serde_json::from_str(&format!("\"{VALID_ID}\"")).expect("valid");
        assert_eq!(id.to_string(), VALID_ID);
    }
}
