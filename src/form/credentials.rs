//! Credentials snapshot
//!
//! Immutable value captured from the form at submit time.

use std::fmt;

/// Email address and password as they were when the form was submitted.
///
/// Two snapshots with equal fields are interchangeable. The type exposes no
/// mutators, so a snapshot never changes once created.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Credentials {
    email_address: String,
    password: String,
}

impl Credentials {
    pub fn new(email_address: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            password: password.into(),
        }
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Splits the snapshot into `(email_address, password)`.
    pub fn into_parts(self) -> (String, String) {
        (self.email_address, self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email_address", &self.email_address)
            .field("password", &"***")
            .finish()
    }
}
