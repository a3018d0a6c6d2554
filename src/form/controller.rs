//! Presentation state for the sign-in form: current field values and the
//! current validation errors. No network or business logic lives here.

use crate::form::schema::{self, Credentials, ErrorKind, Field};
use std::collections::BTreeMap;

/// Tracks per-field input and validation state, and gates submission on a
/// clean validation pass.
#[derive(Debug, Default)]
pub struct FormController {
    email: String,
    password: String,
    errors: BTreeMap<Field, ErrorKind>,
}

impl FormController {
    /// Fresh form with empty fields and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Email => self.email = value.to_string(),
            Field::Password => self.password = value.to_string(),
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<ErrorKind> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<Field, ErrorKind> {
        &self.errors
    }

    /// Run the schema against the current values, replacing the error map.
    pub fn validate(&mut self) -> bool {
        match schema::validate(&self.credentials()) {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Validate and, only on a clean pass, hand the validated record to the
    /// submit handler. On a failed pass the handler is not invoked and the
    /// per-field errors are left for the caller to surface.
    pub fn submit<T>(&mut self, handler: impl FnOnce(Credentials) -> T) -> Option<T> {
        if !self.validate() {
            return None;
        }

        Some(handler(self.credentials()))
    }

    fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
