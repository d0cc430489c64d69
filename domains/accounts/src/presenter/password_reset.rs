//! Password recovery screen presenter

use std::sync::Arc;

use matchday_backend::BackendService;
use matchday_common::AuthError;

use crate::domain::validation;
use crate::presenter::messages;

pub struct PasswordResetPresenter {
    backend: Arc<dyn BackendService>,
    pub email: String,
    pub error_message: Option<&'static str>,
    pub success_message: Option<&'static str>,
    pub is_loading: bool,
}

impl PasswordResetPresenter {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self {
            backend,
            email: String::new(),
            error_message: None,
            success_message: None,
            is_loading: false,
        }
    }

    /// Ask the identity service for a reset email.
    pub async fn submit(&mut self) {
        self.error_message = None;
        self.success_message = None;

        if let Err(field) = validation::validate_email(&self.email) {
            self.error_message = Some(messages::field_message(field));
            return;
        }

        self.is_loading = true;
        let result = self.backend.send_password_reset(&self.email).await;
        self.is_loading = false;

        match result {
            Ok(()) => self.success_message = Some(messages::RESET_SENT),
            Err(err) => {
                self.error_message = Some(match err.auth_kind() {
                    Some(AuthError::AccountNotFound) => messages::ACCOUNT_NOT_FOUND,
                    Some(AuthError::MalformedEmail) => messages::MALFORMED_EMAIL,
                    _ => messages::RESET_FAILED,
                });
            }
        }
    }
}
