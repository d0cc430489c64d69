//! Form-field validation rules shared by the account screens
//!
//! These are the client-side pre-network checks. They are deliberately
//! lenient: the email rule only requires an `@` and a `.`, matching what
//! the screens promise the user, with the identity service as the real
//! arbiter.

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side form-field failures, mapped to user-facing copy by the
/// presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmptyEmail,
    MalformedEmail,
    EmptyPassword,
    PasswordTooShort,
    PasswordMismatch,
    EmptyUsername,
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::EmptyEmail);
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(FieldError::MalformedEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::EmptyPassword);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), FieldError> {
    if username.trim().is_empty() {
        return Err(FieldError::EmptyUsername);
    }
    Ok(())
}

/// Registration form check, in the order the screen reports problems:
/// username, email, password strength, confirmation match.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), FieldError> {
    validate_username(username)?;
    validate_email(email)?;
    validate_password(password)?;
    if password != confirmation {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
