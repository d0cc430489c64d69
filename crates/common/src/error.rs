//! Common error types and handling for Matchday

use crate::state::StateError;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Authentication failures, classified by the gateway rather than by
/// matching on provider message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no account exists for this email")]
    AccountNotFound,

    #[error("email is already registered")]
    EmailAlreadyInUse,

    #[error("malformed email address")]
    MalformedEmail,

    #[error("password does not meet minimum strength")]
    WeakPassword,

    #[error("username is already taken")]
    UsernameTaken,

    #[error("no user is signed in")]
    NotSignedIn,
}

/// Common error type for the Matchday application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl Error {
    /// Get the error code for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Error::Auth(_) => "AUTHENTICATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Backend(_) => "BACKEND_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::State(_) => "STATE_ERROR",
        }
    }

    /// The authentication classification, if this is an auth failure
    pub fn auth_kind(&self) -> Option<AuthError> {
        match self {
            Error::Auth(kind) => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::Auth(AuthError::InvalidCredentials).code(),
            "AUTHENTICATION_ERROR"
        );
        assert_eq!(Error::NotFound("test".to_string()).code(), "NOT_FOUND");
        assert_eq!(
            Error::Validation("test".to_string()).code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(Error::Backend("test".to_string()).code(), "BACKEND_ERROR");
    }

    #[test]
    fn test_auth_kind_extraction() {
        let err = Error::Auth(AuthError::UsernameTaken);
        assert_eq!(err.auth_kind(), Some(AuthError::UsernameTaken));

        let err = Error::Backend("connection reset".to_string());
        assert_eq!(err.auth_kind(), None);
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::UsernameTaken.to_string(),
            "username is already taken"
        );
        assert_eq!(
            AuthError::AccountNotFound.to_string(),
            "no account exists for this email"
        );
    }

    #[test]
    fn test_state_error_converts() {
        let state_err = StateError::InvalidTransition {
            state: "idle".to_string(),
            event: "confirm_delete".to_string(),
        };
        let err: Error = state_err.into();
        assert_eq!(err.code(), "STATE_ERROR");
    }
}
