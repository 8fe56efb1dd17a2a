use thiserror::Error;

use crate::login::FieldKind;

/// Everything that can go wrong between a keystroke and a finished login.
///
/// The `Display` text of each variant is exactly what the error region under
/// the offending field shows, so the UI never formats messages itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter your {}", FieldKind::noun(.field))]
    FieldEmpty { field: FieldKind },

    #[error("Please enter a valid {}", FieldKind::noun(.field))]
    FieldInvalidFormat { field: FieldKind },

    #[error("{} must be at least {min} characters", FieldKind::label(.field))]
    FieldTooShort { field: FieldKind, min: usize },

    #[error("{} is too long", FieldKind::label(.field))]
    FieldTooLong { field: FieldKind, max: usize },

    #[error("{0}")]
    FieldWeak(Weakness),

    #[error("Please enter valid credentials")]
    SuspiciousContent,

    /// Reserved for a real backend; the simulated one always resolves.
    #[error("Login failed, please try again")]
    SimulatedTransportFailure { reason: String },
}

/// Why a password that is long enough is still rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Weakness {
    #[error("Please choose a stronger password")]
    CommonPassword,

    #[error("Password should contain letters and numbers")]
    DigitsOnly,
}

pub type LoginResult<T> = Result<T, LoginError>;

impl LoginError {
    /// The field whose error region should carry this message.
    ///
    /// Guard and transport failures are reported against the email field,
    /// the first field of the form.
    pub fn field(&self) -> FieldKind {
        match self {
            LoginError::FieldEmpty { field }
            | LoginError::FieldInvalidFormat { field }
            | LoginError::FieldTooShort { field, .. }
            | LoginError::FieldTooLong { field, .. } => *field,
            LoginError::FieldWeak(_) => FieldKind::Password,
            LoginError::SuspiciousContent | LoginError::SimulatedTransportFailure { .. } => {
                FieldKind::Email
            }
        }
    }
}

/// Problems found while loading the login page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", join_problems(.0))]
    Invalid(Vec<String>),
}

fn join_problems(problems: &[String]) -> String {
    problems.join("; ")
}
