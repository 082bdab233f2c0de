//! Validation rules
//!
//! Individual checks applied to a submitted snapshot, and their messages.

pub const EMPTY_EMAIL_MESSAGE: &str = "Enter an E-Mail Address";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a Valid E-mail Address";
pub const EMPTY_PASSWORD_MESSAGE: &str = "Enter a Password";

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Message for a password shorter than `min_length`.
pub fn short_password_message(min_length: usize) -> String {
    format!("Enter at least {} Digit password", min_length)
}

/// Coarse structural email check.
///
/// Accepts any string without whitespace that has an `@` followed somewhere
/// later by a `.`. This is not RFC 5322 validation.
pub fn is_email_shaped(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.find('@') {
        Some(at) => email[at + 1..].contains('.'),
        None => false,
    }
}

/// True when `password` has at least `min_length` characters.
pub fn has_min_length(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}
