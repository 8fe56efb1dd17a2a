// Core types for the login form - no dioxus imports needed here
use std::fmt;

use crate::services::errors::LoginError;
use crate::login::validation::{
    text_len, validate_email, validate_password, EMAIL_MAX_LEN, PASSWORD_MAX_LEN,
};

/// The two inputs of the login form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    /// Lower-case noun used inside sentences ("Please enter your ...")
    pub fn noun(&self) -> &'static str {
        match self {
            FieldKind::Email => "email address",
            FieldKind::Password => "password",
        }
    }

    /// Capitalised label used at the start of a message
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Email => "Email address",
            FieldKind::Password => "Password",
        }
    }

    pub fn input_id(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }

    pub fn error_id(&self) -> &'static str {
        match self {
            FieldKind::Email => "email-error",
            FieldKind::Password => "password-error",
        }
    }

    pub fn max_len(&self) -> usize {
        match self {
            FieldKind::Email => EMAIL_MAX_LEN,
            FieldKind::Password => PASSWORD_MAX_LEN,
        }
    }
}

// Form lifecycle: Idle -> Loading -> Success | Error, back to Idle on edit
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormState {
    /// Loading waits for the backend; Success waits for the redirect
    pub fn is_locked(&self) -> bool {
        matches!(self, FormState::Loading | FormState::Success)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FormState::Success | FormState::Error)
    }
}

/// Outcome of validating one field
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(error: &LoginError) -> Self {
        Self {
            valid: false,
            message: Some(error.to_string()),
        }
    }
}

impl From<Result<(), LoginError>> for ValidationResult {
    fn from(result: Result<(), LoginError>) -> Self {
        match result {
            Ok(()) => ValidationResult::ok(),
            Err(e) => ValidationResult::fail(&e),
        }
    }
}

/// Trimmed values handed to the login backend
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Action enum for state mutations
#[derive(Clone, PartialEq, Debug)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    FocusField(FieldKind),
    BlurField(FieldKind),
    SetFieldValidation(FieldKind, ValidationResult),
    ClearFieldError(FieldKind),
    TogglePasswordVisibility,
    StartShake,
    StopShake,
    RequestFocus(FieldKind),
    ClearFocusRequest,
    SetFormState(FormState),
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct FieldValidations {
    pub email: Option<ValidationResult>,
    pub password: Option<ValidationResult>,
}

impl FieldValidations {
    pub fn get(&self, field: FieldKind) -> Option<&ValidationResult> {
        match field {
            FieldKind::Email => self.email.as_ref(),
            FieldKind::Password => self.password.as_ref(),
        }
    }

    fn slot(&mut self, field: FieldKind) -> &mut Option<ValidationResult> {
        match field {
            FieldKind::Email => &mut self.email,
            FieldKind::Password => &mut self.password,
        }
    }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub form_state: FormState,
    pub validations: FieldValidations,
    pub password_visible: bool,
    pub focused: Option<FieldKind>,
    pub shaking: bool,
    pub focus_request: Option<FieldKind>,
}

impl LoginState {
    /// Message to render in the field's error region, if any
    pub fn error_message(&self, field: FieldKind) -> Option<&str> {
        self.validations
            .get(field)
            .filter(|v| !v.valid)
            .and_then(|v| v.message.as_deref())
    }

    pub fn has_error(&self, field: FieldKind) -> bool {
        self.error_message(field).is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.form_state.is_locked()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }

    pub fn validate_field(&self, field: FieldKind) -> ValidationResult {
        match field {
            FieldKind::Email => validate_email(&self.email),
            FieldKind::Password => validate_password(&self.password),
        }
    }

    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(value) => self.edit_field(FieldKind::Email, value),
            LoginAction::SetPassword(value) => self.edit_field(FieldKind::Password, value),
            LoginAction::FocusField(field) => self.focused = Some(field),
            LoginAction::BlurField(field) => {
                if self.focused == Some(field) {
                    self.focused = None;
                }
                let result = self.validate_field(field);
                *self.validations.slot(field) = Some(result);
            }
            LoginAction::SetFieldValidation(field, result) => {
                *self.validations.slot(field) = Some(result);
            }
            LoginAction::ClearFieldError(field) => *self.validations.slot(field) = None,
            LoginAction::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
            }
            LoginAction::StartShake => self.shaking = true,
            LoginAction::StopShake => self.shaking = false,
            LoginAction::RequestFocus(field) => self.focus_request = Some(field),
            LoginAction::ClearFocusRequest => self.focus_request = None,
            LoginAction::SetFormState(next) => {
                tracing::debug!(from = ?self.form_state, to = ?next, "form state transition");
                self.form_state = next;
            }
        }
    }

    fn edit_field(&mut self, field: FieldKind, value: String) {
        let clamped = clamp_utf16(value, field.max_len());
        match field {
            FieldKind::Email => self.email = clamped,
            FieldKind::Password => self.password = clamped,
        }
        *self.validations.slot(field) = None;
        if self.form_state.is_settled() {
            self.form_state = FormState::Idle;
        }
    }
}

// Never splits a surrogate pair, so the result may be one unit short
fn clamp_utf16(value: String, max: usize) -> String {
    if text_len(&value) <= max {
        return value;
    }
    let mut units = 0;
    let end = value
        .char_indices()
        .find(|(_, c)| {
            units += c.len_utf16();
            units > max
        })
        .map(|(idx, _)| idx)
        .unwrap_or(value.len());
    value[..end].to_string()
}
