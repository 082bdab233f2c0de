//! Login view model
//!
//! Headless model of what the login screen shows: an error on at most one
//! field, the focused field and the two answer labels.

use std::fmt;

use crate::validation::{Field, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginView {
    email_error: Option<String>,
    password_error: Option<String>,
    focused: Option<Field>,
    email_answer: String,
    password_answer: String,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a validation result to the view.
    ///
    /// Field errors from the previous render are cleared first. An invalid
    /// result leaves the answer labels as they were; a valid one drops focus.
    pub fn render(&mut self, result: &ValidationResult) {
        self.email_error = None;
        self.password_error = None;

        match result {
            ValidationResult::Invalid { field, message } => {
                match field {
                    Field::EmailAddress => self.email_error = Some(message.clone()),
                    Field::Password => self.password_error = Some(message.clone()),
                }
                self.focused = Some(*field);
            }
            ValidationResult::Valid {
                email_address,
                password,
            } => {
                self.email_answer = email_address.clone();
                self.password_answer = password.clone();
                self.focused = None;
            }
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        match field {
            Field::EmailAddress => self.email_error.as_deref(),
            Field::Password => self.password_error.as_deref(),
        }
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn email_answer(&self) -> &str {
        &self.email_answer
    }

    pub fn password_answer(&self) -> &str {
        &self.password_answer
    }
}

impl fmt::Display for LoginView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in [Field::EmailAddress, Field::Password] {
            if let Some(message) = self.error(field) {
                let marker = if self.focused == Some(field) { ">" } else { " " };
                writeln!(f, "{} {}: {}", marker, field, message)?;
            }
        }
        writeln!(f, "  Email: {}", self.email_answer)?;
        write!(f, "  Password: {}", self.password_answer)
    }
}
