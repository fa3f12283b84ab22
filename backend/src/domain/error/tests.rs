//! Tests for error codes and their wire names.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::EmptyCredentials, ErrorCode::EmptyCredentials)]
#[case(Error::InvalidCredentials, ErrorCode::InvalidCredentials)]
#[case(Error::AuthorizationFailed, ErrorCode::AuthorizationFailed)]
#[case(Error::EmptyTaskDescription, ErrorCode::EmptyTaskDescription)]
#[case(
    Error::TaskNotFound { id: TaskId::random() },
    ErrorCode::TaskNotFound
)]
#[case(
    Error::TodoListAlreadyExists { id: TodoListId::random() },
    ErrorCode::TodoListAlreadyExists
)]
fn variants_map_to_stable_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
    assert!(!error.is_internal());
}

#[rstest]
fn store_errors_are_internal() {
    let error = Error::from(StoreError::unknown_attribute("Task", "colour"));
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.is_internal());
    assert_eq!(error.to_string(), "Task has no indexed attribute named colour");
}

#[rstest]
fn credential_validation_collapses_to_empty_credentials() {
    assert_eq!(
        Error::from(UserValidationError::EmptyPassword),
        Error::EmptyCredentials
    );
}

#[rstest]
fn codes_serialise_in_snake_case() {
    let value = serde_json::to_value([
        ErrorCode::UpdateCompletedTask,
        ErrorCode::TodoListNotFound,
    ])
    .expect("serialise codes");
    assert_eq!(value, json!(["update_completed_task", "todo_list_not_found"]));
}

#[rstest]
fn messages_name_the_offending_id() {
    let id = TaskId::random();
    let error = Error::UpdateCompletedTask { id: id.clone() };
    assert_eq!(
        error.to_string(),
        format!("task {id} is completed and cannot be updated")
    );
}
