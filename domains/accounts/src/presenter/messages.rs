//! User-facing copy for the account screens
//!
//! The product ships in Spanish; every canned string lives here so the
//! presenters stay free of literals and tests can assert on the constants.

use matchday_common::{AuthError, Error};

use crate::domain::validation::FieldError;

pub const EMPTY_EMAIL: &str = "El correo no puede estar vacío";
pub const MALFORMED_EMAIL: &str = "El formato del correo no es válido";
pub const EMPTY_PASSWORD: &str = "La contraseña no puede estar vacía";
pub const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 6 caracteres";
pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";
pub const EMPTY_USERNAME: &str = "El nombre de usuario no puede estar vacío";

pub const WRONG_PASSWORD: &str = "La contraseña es incorrecta";
pub const ACCOUNT_NOT_FOUND: &str = "No existe una cuenta con este correo";
pub const EMAIL_IN_USE: &str = "El correo ya está registrado";
pub const USERNAME_TAKEN: &str = "El nombre de usuario ya existe";
pub const NOT_SIGNED_IN: &str = "No hay usuario logueado";

pub const LOGIN_FAILED: &str = "Error al iniciar sesión. Comprueba tus datos.";
pub const RESET_SENT: &str = "Se ha enviado un correo para restablecer la contraseña";
pub const RESET_FAILED: &str = "No se pudo enviar el correo. Inténtalo más tarde.";
pub const PROFILE_UPDATED: &str = "Perfil actualizado correctamente.";
pub const GENERIC_ERROR: &str = "Ha ocurrido un error.";

/// Copy for a client-side form-field failure
pub fn field_message(field: FieldError) -> &'static str {
    match field {
        FieldError::EmptyEmail => EMPTY_EMAIL,
        FieldError::MalformedEmail => MALFORMED_EMAIL,
        FieldError::EmptyPassword => EMPTY_PASSWORD,
        FieldError::PasswordTooShort => PASSWORD_TOO_SHORT,
        FieldError::PasswordMismatch => PASSWORD_MISMATCH,
        FieldError::EmptyUsername => EMPTY_USERNAME,
    }
}

/// Copy for a backend failure, selected by error kind with a generic
/// fallback for anything unclassified.
pub fn auth_message(err: &Error) -> &'static str {
    match err.auth_kind() {
        Some(AuthError::InvalidCredentials) => WRONG_PASSWORD,
        Some(AuthError::AccountNotFound) => ACCOUNT_NOT_FOUND,
        Some(AuthError::EmailAlreadyInUse) => EMAIL_IN_USE,
        Some(AuthError::MalformedEmail) => MALFORMED_EMAIL,
        Some(AuthError::WeakPassword) => PASSWORD_TOO_SHORT,
        Some(AuthError::UsernameTaken) => USERNAME_TAKEN,
        Some(AuthError::NotSignedIn) => NOT_SIGNED_IN,
        None => GENERIC_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_message_by_kind() {
        assert_eq!(
            auth_message(&AuthError::UsernameTaken.into()),
            USERNAME_TAKEN
        );
        assert_eq!(
            auth_message(&AuthError::InvalidCredentials.into()),
            WRONG_PASSWORD
        );
    }

    #[test]
    fn test_auth_message_fallback() {
        let err = Error::Backend("connection reset by peer".to_string());
        assert_eq!(auth_message(&err), GENERIC_ERROR);
    }
}
