//! Accounts domain: users, registration, sessions, and profile screens

pub mod domain;
pub mod presenter;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Role, User};
pub use domain::validation::{self, FieldError};
pub use presenter::{
    LoginPresenter, PasswordResetPresenter, ProfilePresenter, RegisterPresenter,
};
pub use repository::users::{UserRepository, USERS_COLLECTION};
