//! Form binding
//!
//! Connects a [`FormState`] to a [`Validator`]: every submit is validated
//! and the result is published to result observers before `submit` returns.

use std::cell::RefCell;
use std::rc::Rc;

use crate::form::{Credentials, FormState, Observable, SubscriptionId};
use crate::validation::{ValidationResult, Validator};

pub struct FormBinding {
    form: FormState,
    validator: Validator,
    results: Rc<RefCell<Observable<ValidationResult>>>,
}

impl FormBinding {
    pub fn new(validator: Validator) -> Self {
        let mut form = FormState::new();
        let results = Rc::new(RefCell::new(Observable::new()));

        let sink = Rc::clone(&results);
        form.observe(move |snapshot: &Credentials| {
            let result = validator.validate(snapshot);
            sink.borrow_mut().set_value(result);
        });

        Self {
            form,
            validator,
            results,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn set_email_address(&mut self, value: impl Into<String>) {
        self.form.set_email_address(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.set_password(value);
    }

    /// Submits the form. Result observers have run when this returns.
    pub fn submit(&mut self) {
        self.form.submit();
    }

    /// Clears the form and the latest result.
    pub fn reset(&mut self) {
        self.form.reset();
        self.results.borrow_mut().clear();
    }

    /// Registers `observer` for every validation result. The observer must
    /// not call `observe_results`, `remove_result_observer` or
    /// `latest_result` on this binding: those panic while results are being
    /// delivered.
    pub fn observe_results<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ValidationResult) + 'static,
    {
        self.results.borrow_mut().observe(observer)
    }

    pub fn remove_result_observer(&self, id: SubscriptionId) -> bool {
        self.results.borrow_mut().remove_observer(id)
    }

    pub fn latest_result(&self) -> Option<ValidationResult> {
        self.results.borrow().value().cloned()
    }
}

impl Default for FormBinding {
    fn default() -> Self {
        Self::new(Validator::default())
    }
}
