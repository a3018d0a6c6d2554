//! Validation rules for the sign-in form. Checks are pure and run before
//! any request is made; messages are the user-facing pt-BR strings.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Credentials payload sent to the signin endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Named input of the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyField,
    InvalidFormat,
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// User-facing message for a failed field.
#[must_use]
pub const fn message(field: Field, kind: ErrorKind) -> &'static str {
    match (field, kind) {
        (Field::Email, ErrorKind::EmptyField) => "Por favor, insira seu Email",
        (Field::Email, ErrorKind::InvalidFormat) => "Endereço de email inválido",
        (Field::Password, _) => "Por favor, insira sua Senha",
    }
}

/// Validate the credentials record. Per field, emptiness is checked before
/// format; the raw string is inspected without trimming.
pub fn validate(credentials: &Credentials) -> Result<(), BTreeMap<Field, ErrorKind>> {
    let mut errors = BTreeMap::new();

    if credentials.email.is_empty() {
        errors.insert(Field::Email, ErrorKind::EmptyField);
    } else if !valid_email(&credentials.email) {
        errors.insert(Field::Email, ErrorKind::InvalidFormat);
    }

    if credentials.password.is_empty() {
        errors.insert(Field::Password, ErrorKind::EmptyField);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
