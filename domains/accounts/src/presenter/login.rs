//! Login screen presenter

use std::sync::Arc;

use matchday_backend::BackendService;

use crate::domain::validation;
use crate::presenter::messages;

pub struct LoginPresenter {
    backend: Arc<dyn BackendService>,
    pub email: String,
    pub password: String,
    pub error_message: Option<&'static str>,
    pub is_loading: bool,
}

impl LoginPresenter {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self {
            backend,
            email: String::new(),
            password: String::new(),
            error_message: None,
            is_loading: false,
        }
    }

    /// Validate the form and attempt sign-in. Returns `true` when the
    /// session was established, so the shell can navigate to home.
    pub async fn submit(&mut self) -> bool {
        self.error_message = None;

        if let Err(field) = validation::validate_email(&self.email) {
            self.error_message = Some(messages::field_message(field));
            return false;
        }
        if let Err(field) = validation::validate_password(&self.password) {
            self.error_message = Some(messages::field_message(field));
            return false;
        }

        self.is_loading = true;
        let result = self.backend.sign_in(&self.email, &self.password).await;
        self.is_loading = false;

        match result {
            Ok(()) => true,
            Err(err) => {
                self.error_message = Some(match err.auth_kind() {
                    Some(_) => messages::auth_message(&err),
                    None => messages::LOGIN_FAILED,
                });
                false
            }
        }
    }
}
