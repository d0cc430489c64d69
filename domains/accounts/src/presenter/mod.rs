//! Account screen presenters
//!
//! Headless state holders the UI shell renders and drives: each owns its
//! form fields, an optional user-facing message, and an in-flight flag the
//! shell uses to disable the submit control. All user-facing copy lives in
//! [`messages`] and is selected by error kind, never by matching on
//! backend message text.

pub mod login;
pub mod messages;
pub mod password_reset;
pub mod profile;
pub mod register;

pub use login::LoginPresenter;
pub use password_reset::PasswordResetPresenter;
pub use profile::ProfilePresenter;
pub use register::RegisterPresenter;
