//! Login form validator
//!
//! Runs the ordered rule chain over a submitted snapshot. The first failing
//! rule decides the result.

use log::debug;

use super::results::{Field, ValidationResult};
use super::rules::{
    self, DEFAULT_MIN_PASSWORD_LENGTH, EMPTY_EMAIL_MESSAGE, EMPTY_PASSWORD_MESSAGE,
    INVALID_EMAIL_MESSAGE,
};
use crate::config::AppConfig;
use crate::form::Credentials;

/// Stateless validator; holds only its rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    min_password_length: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl Validator {
    pub fn new(min_password_length: usize) -> Self {
        Self { min_password_length }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.min_password_length)
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    /// Validates `snapshot`. Every snapshot maps to exactly one result.
    pub fn validate(&self, snapshot: &Credentials) -> ValidationResult {
        let email = snapshot.email_address();
        let password = snapshot.password();

        let result = if email.is_empty() {
            ValidationResult::invalid(Field::EmailAddress, EMPTY_EMAIL_MESSAGE)
        } else if !rules::is_email_shaped(email) {
            ValidationResult::invalid(Field::EmailAddress, INVALID_EMAIL_MESSAGE)
        } else if password.is_empty() {
            ValidationResult::invalid(Field::Password, EMPTY_PASSWORD_MESSAGE)
        } else if !rules::has_min_length(password, self.min_password_length) {
            ValidationResult::invalid(
                Field::Password,
                rules::short_password_message(self.min_password_length),
            )
        } else {
            ValidationResult::Valid {
                email_address: email.to_string(),
                password: password.to_string(),
            }
        };

        match &result {
            ValidationResult::Invalid { field, message } => {
                debug!("Validation failed on {}: {}", field, message)
            }
            ValidationResult::Valid { .. } => debug!("Validation passed"),
        }
        result
    }
}

/// Validates `snapshot` with the default rules.
pub fn validate(snapshot: &Credentials) -> ValidationResult {
    Validator::default().validate(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(email: &str, password: &str) -> ValidationResult {
        validate(&Credentials::new(email, password))
    }

    #[test]
    fn test_empty_email_wins_regardless_of_password() {
        for password in ["", "abc", "abcdef", "a very long password"] {
            assert_eq!(
                check("", password),
                ValidationResult::invalid(Field::EmailAddress, "Enter an E-Mail Address")
            );
        }
    }

    #[test]
    fn test_malformed_email() {
        for email in ["bob", "bob@example", "bob.example@com", "bo b@example.com"] {
            assert_eq!(
                check(email, "secret1"),
                ValidationResult::invalid(Field::EmailAddress, "Enter a Valid E-mail Address")
            );
        }
    }

    #[test]
    fn test_email_checked_before_password() {
        assert_eq!(check("bob", "").field(), Some(Field::EmailAddress));
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(
            check("bob@example.com", ""),
            ValidationResult::invalid(Field::Password, "Enter a Password")
        );
    }

    #[test]
    fn test_short_password() {
        for password in ["a", "ab", "abc", "abcd", "abcde"] {
            assert_eq!(
                check("bob@example.com", password),
                ValidationResult::invalid(Field::Password, "Enter at least 6 Digit password")
            );
        }
    }

    #[test]
    fn test_valid_echoes_input() {
        assert_eq!(
            check("bob@example.com", "abcdef"),
            ValidationResult::Valid {
                email_address: "bob@example.com".to_string(),
                password: "abcdef".to_string(),
            }
        );
    }

    #[test]
    fn test_whitespace_password_counts() {
        assert!(check("bob@example.com", "      ").is_valid());
    }

    #[test]
    fn test_custom_min_length() {
        let validator = Validator::new(8);
        let result = validator.validate(&Credentials::new("bob@example.com", "abcdefg"));
        assert_eq!(result.message(), Some("Enter at least 8 Digit password"));
        assert!(
            validator
                .validate(&Credentials::new("bob@example.com", "abcdefgh"))
                .is_valid()
        );
    }
}
