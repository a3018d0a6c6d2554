//! Alert shown when a sign-in attempt fails. The message is fixed and
//! never carries the underlying error detail.

use std::fmt;

/// Supported alert styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Destructive,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Alert {
    /// The one alert this client emits: a generic sign-in failure. Timeouts,
    /// rejected credentials and server errors all map to this same alert.
    #[must_use]
    pub const fn signin_failure() -> Self {
        Self {
            kind: AlertKind::Destructive,
            title: "Ops, Algo deu errado!",
            message: "Não foi possível fazer login, revise seus dados e tente novamente.",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.message)
    }
}
