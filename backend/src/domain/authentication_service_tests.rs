//! Tests for the authentication service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::outbound::memory::InMemoryStore;
use crate::test_support::{MutableClock, fixture_timestamp};

type Service = AuthenticationService<InMemoryStore<User>, InMemoryStore<AuthSession>>;

struct Harness {
    service: Service,
    users: Arc<InMemoryStore<User>>,
    sessions: Arc<InMemoryStore<AuthSession>>,
}

#[fixture]
fn harness() -> Harness {
    let users = Arc::new(InMemoryStore::new());
    let sessions = Arc::new(InMemoryStore::new());
    let service = AuthenticationService::new(
        Arc::clone(&users),
        Arc::clone(&sessions),
        Arc::new(MutableClock::at_fixture()),
    );
    Harness {
        service,
        users,
        sessions,
    }
}

#[rstest]
#[case("", "secret1")]
#[case("   ", "secret1")]
#[case("alice", "")]
#[case("alice", "  ")]
fn create_user_rejects_blank_credentials(
    harness: Harness,
    #[case] username: &str,
    #[case] password: &str,
) {
    let err = harness
        .service
        .create_user(username, password)
        .expect_err("blank credentials");
    assert_eq!(err, Error::EmptyCredentials);
    assert!(harness.users.is_empty());
}

#[rstest]
fn create_user_rejects_duplicate_username(harness: Harness) {
    harness
        .service
        .create_user("alice", "secret1")
        .expect("first registration");

    let err = harness
        .service
        .create_user(" alice ", "other")
        .expect_err("duplicate username");

    assert_eq!(
        err,
        Error::UserAlreadyExists {
            username: "alice".to_owned()
        }
    );
    assert_eq!(harness.users.len(), 1);
}

#[rstest]
fn create_user_does_not_open_a_session(harness: Harness) {
    harness
        .service
        .create_user("alice", "secret1")
        .expect("registration");
    assert!(harness.sessions.is_empty());
}

#[rstest]
fn sign_in_round_trips_to_the_registered_user(harness: Harness) {
    let user_id = harness
        .service
        .create_user("alice", "secret1")
        .expect("registration");

    let token = harness
        .service
        .sign_in("alice", "secret1")
        .expect("sign in");

    assert_eq!(harness.service.validate(&token).expect("valid token"), user_id);
    let session = harness
        .sessions
        .read(&token)
        .expect("read session")
        .expect("session stored");
    assert_eq!(session.issued_at(), fixture_timestamp());
}

#[rstest]
#[case("alice", "wrong")]
#[case("mallory", "secret1")]
fn sign_in_rejects_unknown_user_or_wrong_password(
    harness: Harness,
    #[case] username: &str,
    #[case] password: &str,
) {
    harness
        .service
        .create_user("alice", "secret1")
        .expect("registration");

    let err = harness
        .service
        .sign_in(username, password)
        .expect_err("invalid credentials");

    assert_eq!(err, Error::InvalidCredentials);
    assert!(harness.sessions.is_empty());
}

#[rstest]
fn sign_in_rejects_blank_credentials(harness: Harness) {
    let err = harness.service.sign_in("alice", " ").expect_err("blank");
    assert_eq!(err, Error::EmptyCredentials);
}

#[rstest]
fn each_sign_in_opens_a_separate_session(harness: Harness) {
    let user_id = harness
        .service
        .create_user("alice", "secret1")
        .expect("registration");

    let first = harness.service.sign_in("alice", "secret1").expect("first");
    let second = harness.service.sign_in("alice", "secret1").expect("second");

    assert_ne!(first, second);
    assert_eq!(harness.service.validate(&first).expect("first valid"), user_id);
    assert_eq!(harness.service.validate(&second).expect("second valid"), user_id);
}

#[rstest]
fn sign_out_invalidates_token_and_is_idempotent(harness: Harness) {
    harness
        .service
        .create_user("alice", "secret1")
        .expect("registration");
    let token = harness.service.sign_in("alice", "secret1").expect("sign in");

    harness.service.sign_out(&token).expect("first sign out");
    harness.service.sign_out(&token).expect("second sign out");

    assert_eq!(
        harness.service.validate(&token).expect_err("revoked token"),
        Error::AuthorizationFailed
    );
}

#[rstest]
fn validate_rejects_unknown_token(harness: Harness) {
    let token = Token::new("never-issued").expect("opaque token");
    assert_eq!(
        harness.service.validate(&token).expect_err("unknown token"),
        Error::AuthorizationFailed
    );
}

#[rstest]
fn revoke_sessions_removes_only_that_users_sessions(harness: Harness) {
    let alice = harness
        .service
        .create_user("alice", "secret1")
        .expect("alice registration");
    harness
        .service
        .create_user("bob", "secret2")
        .expect("bob registration");
    let first = harness.service.sign_in("alice", "secret1").expect("sign in");
    let second = harness.service.sign_in("alice", "secret1").expect("sign in");
    let bobs = harness.service.sign_in("bob", "secret2").expect("sign in");

    let revoked = harness.service.revoke_sessions(&alice).expect("revoke");

    assert_eq!(revoked, 2);
    assert!(harness.service.validate(&first).is_err());
    assert!(harness.service.validate(&second).is_err());
    assert!(harness.service.validate(&bobs).is_ok());
}
