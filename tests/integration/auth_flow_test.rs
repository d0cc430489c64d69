//! Account flow integration tests
//!
//! Drives registration, login, password reset, and profile update through
//! the presenters against the mock backend, checking the classifications
//! the screens show the user.

mod common;

use common::TestApp;
use matchday_accounts::presenter::messages;
use matchday_backend::BackendService as _;
use matchday_common::AuthError;

#[tokio::test]
async fn test_register_then_login_then_profile() {
    let app = TestApp::new();

    let mut register = app.state.register_screen();
    register.username = "alice".to_string();
    register.email = "alice@x.com".to_string();
    register.password = "secret1".to_string();
    register.confirm_password = "secret1".to_string();
    assert!(register.submit().await);

    // Registration does not sign in; the user goes through the login screen
    assert!(app.backend.current_account_id().is_none());

    let mut login = app.state.login_screen();
    login.email = "alice@x.com".to_string();
    login.password = "secret1".to_string();
    assert!(login.submit().await);

    let mut profile = app.state.profile_screen();
    profile.load().await;
    assert_eq!(profile.user.as_ref().unwrap().username, "alice");
    assert!(!profile.user.as_ref().unwrap().is_admin());
}

#[tokio::test]
async fn test_duplicate_username_classified_as_taken() {
    let app = TestApp::new();
    app.register_user("alice", "alice@x.com", "secret1").await;

    let mut register = app.state.register_screen();
    register.username = "alice".to_string();
    register.email = "bob@x.com".to_string();
    register.password = "secret2".to_string();
    register.confirm_password = "secret2".to_string();

    assert!(!register.submit().await);
    assert_eq!(register.error_message, Some(messages::USERNAME_TAKEN));
}

#[tokio::test]
async fn test_taken_username_with_fresh_email_creates_no_account() {
    let app = TestApp::new();
    app.register_user("alice", "alice@x.com", "secret1").await;

    let err = app
        .state
        .users
        .register("alice", "bob@x.com", "secret2")
        .await
        .unwrap_err();
    assert_eq!(err.auth_kind(), Some(AuthError::UsernameTaken));

    // The identity service never saw bob@x.com
    assert!(app
        .backend
        .create_account("bob@x.com", "secret2")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_taken_username_with_existing_account_still_classified_as_taken() {
    let app = TestApp::new();
    app.register_user("alice", "alice@x.com", "secret1").await;

    // An identity account for this email already exists upstream, as a
    // half-finished registration would leave behind.
    app.backend
        .create_account("bob@x.com", "secret2")
        .await
        .unwrap();

    // The username check still wins over the email collision
    let err = app
        .state
        .users
        .register("alice", "bob@x.com", "secret2")
        .await
        .unwrap_err();
    assert_eq!(err.auth_kind(), Some(AuthError::UsernameTaken));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials_with_copy() {
    let app = TestApp::new();
    app.register_user("alice", "alice@x.com", "secret1").await;

    let mut login = app.state.login_screen();
    login.email = "alice@x.com".to_string();
    login.password = "nottheone".to_string();
    assert!(!login.submit().await);
    assert_eq!(login.error_message, Some(messages::WRONG_PASSWORD));

    login.email = "carol@x.com".to_string();
    login.password = "secret1".to_string();
    assert!(!login.submit().await);
    assert_eq!(login.error_message, Some(messages::ACCOUNT_NOT_FOUND));
}

#[tokio::test]
async fn test_password_reset_flow() {
    let app = TestApp::new();
    app.register_user("alice", "alice@x.com", "secret1").await;

    let mut reset = app.state.password_reset_screen();
    reset.email = "alice@x.com".to_string();
    reset.submit().await;

    assert_eq!(reset.success_message, Some(messages::RESET_SENT));
    assert_eq!(
        app.backend.password_reset_requests(),
        vec!["alice@x.com".to_string()]
    );
}

#[tokio::test]
async fn test_profile_update_and_username_collision() {
    let app = TestApp::new();
    app.register_user("alice", "alice@x.com", "secret1").await;
    app.register_user("bob", "bob@x.com", "secret2").await;

    app.backend.sign_in("bob@x.com", "secret2").await.unwrap();

    let mut profile = app.state.profile_screen();
    profile.load().await;

    // Taking alice's username is rejected with the taken copy
    profile.update("alice", "bob@x.com").await;
    assert_eq!(profile.message, Some(messages::USERNAME_TAKEN));

    // A fresh username goes through and rewrites the document
    profile.update("roberto", "roberto@x.com").await;
    assert_eq!(profile.message, Some(messages::PROFILE_UPDATED));

    let stored = app
        .state
        .users
        .current_profile()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.username, "roberto");
    assert_eq!(stored.email, "roberto@x.com");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::new();
    app.register_user("alice", "alice@x.com", "secret1").await;
    app.backend.sign_in("alice@x.com", "secret1").await.unwrap();

    let mut profile = app.state.profile_screen();
    profile.load().await;
    profile.logout();

    assert!(app.backend.current_account_id().is_none());
    profile.load().await;
    assert!(profile.user.is_none());
}
