//! Module `state`
//!
//! Defines the `FormState` struct holding the live login form input
//! and the last submitted credentials snapshot.

use log::{debug, info};

use crate::form::credentials::Credentials;
use crate::form::observable::{Observable, SubscriptionId};

/// Live input of the login form.
///
/// The email address and password are updated freely as the user types.
/// Only [`FormState::submit`] produces a [`Credentials`] snapshot, so the
/// last submitted value is never a partially typed one.
#[derive(Default)]
pub struct FormState {
    email_address: String,
    password: String,
    submitted: Observable<Credentials>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the email address currently typed in.
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Returns the password currently typed in.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the snapshot recorded by the latest submit, if any.
    pub fn last_submitted(&self) -> Option<&Credentials> {
        self.submitted.value()
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Replaces the email address. No validation happens here.
    pub fn set_email_address(&mut self, value: impl Into<String>) {
        self.email_address = value.into();
        debug!("Email address updated ({} chars)", self.email_address.chars().count());
    }

    /// Replaces the password. No validation happens here.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        debug!("Password updated ({} chars)", self.password.chars().count());
    }

    // --------------------
    // Submission
    // --------------------

    /// Captures the current input as a snapshot, records it as the last
    /// submitted value and calls every observer before returning.
    ///
    /// Submitting with no observer attached only records the snapshot.
    pub fn submit(&mut self) {
        let snapshot = Credentials::new(self.email_address.clone(), self.password.clone());
        info!("Form submitted for {:?}", snapshot.email_address());

        if !self.submitted.has_observers() {
            debug!("No observer attached, recording snapshot only");
        }
        self.submitted.set_value(snapshot);
    }

    /// Registers `observer` to be called with each submitted snapshot.
    pub fn observe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Credentials) + 'static,
    {
        self.submitted.observe(observer)
    }

    pub fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        self.submitted.remove_observer(id)
    }

    /// Clears both inputs and the last submitted snapshot.
    ///
    /// Registered observers stay attached.
    pub fn reset(&mut self) {
        self.email_address.clear();
        self.password.clear();
        self.submitted.clear();
    }
}
