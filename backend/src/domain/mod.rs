//! Domain primitives, services and the operation façade.
//!
//! Purpose: define strongly typed entities, the identity and access services
//! and the per-use-case operations. Keep types immutable and document
//! invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Entity identity: `Entity`, `EntityId`, `UserId`, `TodoListId`, `TaskId`,
//!   `Token`.
//! - Records: `User`, `AuthSession`, `TodoList`, `Task`.
//! - Services: `AuthenticationService`, `OwnershipAuthorizationService`.
//! - Errors: `Error` and its stable `ErrorCode`.

mod auth;
mod authentication_service;
mod authorization_service;
mod entity;
mod error;
pub mod operations;
pub mod ports;
mod task;
mod todo_list;
mod user;

pub use self::auth::{AuthSession, Credentials, Token};
pub use self::authentication_service::AuthenticationService;
pub use self::authorization_service::OwnershipAuthorizationService;
pub use self::entity::{
    Entity, EntityId, IdValidationError, IndexedAttribute, TaskId, TodoListId, UserId,
};
pub use self::error::{Error, ErrorCode};
pub use self::task::{Task, TaskDescription, TaskUpdate};
pub use self::todo_list::TodoList;
pub use self::user::{Password, User, UserValidationError, Username};
