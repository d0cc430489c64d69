//! Registration screen presenter

use crate::domain::validation;
use crate::presenter::messages;
use crate::repository::users::UserRepository;

pub struct RegisterPresenter {
    users: UserRepository,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error_message: Option<&'static str>,
    pub is_loading: bool,
}

impl RegisterPresenter {
    pub fn new(users: UserRepository) -> Self {
        Self {
            users,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error_message: None,
            is_loading: false,
        }
    }

    /// Validate the form and register. Returns `true` on success, so the
    /// shell can navigate back to the login screen.
    pub async fn submit(&mut self) -> bool {
        self.error_message = None;

        if let Err(field) = validation::validate_registration(
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
        ) {
            self.error_message = Some(messages::field_message(field));
            return false;
        }

        self.is_loading = true;
        let result = self
            .users
            .register(&self.username, &self.email, &self.password)
            .await;
        self.is_loading = false;

        match result {
            Ok(_) => true,
            Err(err) => {
                self.error_message = Some(messages::auth_message(&err));
                false
            }
        }
    }
}
