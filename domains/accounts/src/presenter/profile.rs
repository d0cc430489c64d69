//! Profile screen presenter

use std::sync::Arc;

use matchday_backend::BackendService;

use crate::domain::entities::User;
use crate::domain::validation;
use crate::presenter::messages;
use crate::repository::users::UserRepository;

pub struct ProfilePresenter {
    backend: Arc<dyn BackendService>,
    users: UserRepository,
    pub user: Option<User>,
    pub message: Option<&'static str>,
    pub is_loading: bool,
}

impl ProfilePresenter {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self {
            users: UserRepository::new(backend.clone()),
            backend,
            user: None,
            message: None,
            is_loading: false,
        }
    }

    /// Load the signed-in user's profile. A missing session or a failed
    /// read both leave `user` unset; the screen shows its empty state.
    pub async fn load(&mut self) {
        self.is_loading = true;
        self.user = match self.users.current_profile().await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "Profile load failed");
                None
            }
        };
        self.is_loading = false;
    }

    /// Update username and email for the signed-in user.
    pub async fn update(&mut self, username: &str, email: &str) {
        self.message = None;

        if let Err(field) = validation::validate_username(username) {
            self.message = Some(messages::field_message(field));
            return;
        }
        if let Err(field) = validation::validate_email(email) {
            self.message = Some(messages::field_message(field));
            return;
        }

        self.is_loading = true;
        let result = self.users.update_profile(username, email).await;
        self.is_loading = false;

        match result {
            Ok(user) => {
                self.user = Some(user);
                self.message = Some(messages::PROFILE_UPDATED);
            }
            Err(err) => self.message = Some(messages::auth_message(&err)),
        }
    }

    /// Drop the session.
    pub fn logout(&mut self) {
        self.backend.sign_out();
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_backend::mock::MockBackend;

    async fn signed_in_presenter() -> (Arc<MockBackend>, ProfilePresenter) {
        let backend = Arc::new(MockBackend::new());
        let users = UserRepository::new(backend.clone());
        users
            .register("ana", "ana@example.com", "secret1")
            .await
            .unwrap();
        backend.sign_in("ana@example.com", "secret1").await.unwrap();
        let presenter = ProfilePresenter::new(backend.clone());
        (backend, presenter)
    }

    #[tokio::test]
    async fn test_load_shows_current_user() {
        let (_backend, mut presenter) = signed_in_presenter().await;
        presenter.load().await;
        assert_eq!(presenter.user.as_ref().unwrap().username, "ana");
    }

    #[tokio::test]
    async fn test_load_without_session_is_empty() {
        let backend = Arc::new(MockBackend::new());
        let mut presenter = ProfilePresenter::new(backend);
        presenter.load().await;
        assert!(presenter.user.is_none());
    }

    #[tokio::test]
    async fn test_update_success_message() {
        let (_backend, mut presenter) = signed_in_presenter().await;
        presenter.update("ana_maria", "ana@example.com").await;
        assert_eq!(presenter.message, Some(messages::PROFILE_UPDATED));
        assert_eq!(presenter.user.as_ref().unwrap().username, "ana_maria");
    }

    #[tokio::test]
    async fn test_update_blank_username_rejected() {
        let (_backend, mut presenter) = signed_in_presenter().await;
        presenter.update("", "ana@example.com").await;
        assert_eq!(presenter.message, Some(messages::EMPTY_USERNAME));
    }

    #[tokio::test]
    async fn test_update_without_session_reports_not_signed_in() {
        let (backend, mut presenter) = signed_in_presenter().await;
        backend.sign_out();
        presenter.update("ana_maria", "ana@example.com").await;
        assert_eq!(presenter.message, Some(messages::NOT_SIGNED_IN));
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_user() {
        let (backend, mut presenter) = signed_in_presenter().await;
        presenter.load().await;
        assert!(presenter.user.is_some());

        presenter.logout();
        assert!(presenter.user.is_none());
        assert!(backend.current_account_id().is_none());
    }
}
