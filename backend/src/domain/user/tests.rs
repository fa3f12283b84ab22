//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn ada() -> User {
    User::new(
        UserId::random(),
        Username::new("ada").expect("valid username"),
        Password::new("analytical engine").expect("valid password"),
    )
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn username_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(
        Username::new(raw).expect_err("blank username"),
        UserValidationError::EmptyUsername
    );
}

#[rstest]
#[case("")]
#[case("    ")]
fn password_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(
        Password::new(raw).expect_err("blank password"),
        UserValidationError::EmptyPassword
    );
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  grace  ").expect("valid username");
    assert_eq!(username.as_ref(), "grace");
}

#[rstest]
fn password_keeps_whitespace_verbatim() {
    let password = Password::new(" pass word ").expect("valid password");
    assert_eq!(password.expose(), " pass word ");
    assert_ne!(password, Password::new("pass word").expect("valid password"));
}

#[rstest]
fn password_debug_output_is_redacted(ada: User) {
    let rendered = format!("{ada:?}");
    assert!(!rendered.contains("analytical engine"));
    assert!(rendered.contains("<redacted>"));
}

#[rstest]
fn user_indexes_username(ada: User) {
    let indexes = User::indexed_attributes();
    assert_eq!(indexes.len(), 1);
    assert_eq!(indexes[0].name(), User::USERNAME);
    assert_eq!(indexes[0].key_of(&ada), "ada");
}

#[rstest]
fn entity_id_matches_accessor(ada: User) {
    assert_eq!(Entity::id(&ada), ada.id());
}
