//! The submit handler of the login form.
//!
//! `submit_login` takes a snapshot of the state, reports every change
//! through `dispatch`, and returns the form state it ended in. It never
//! touches the DOM, so the whole flow runs in native tests.

use tracing::{debug, info, warn};

use crate::login::types::{FieldKind, FormState, LoginAction, LoginState, ValidationResult};
use crate::login::validation::{check_email, check_password, contains_suspicious_content};
use crate::services::client::LoginBackend;
use crate::services::errors::LoginError;

pub async fn submit_login<B, D>(snapshot: &LoginState, backend: &B, dispatch: D) -> FormState
where
    B: LoginBackend + ?Sized,
    D: Fn(LoginAction),
{
    if !snapshot.can_submit() {
        debug!(state = ?snapshot.form_state, "Submit ignored while the form is locked");
        return snapshot.form_state;
    }

    let email = check_email(&snapshot.email);
    let password = check_password(&snapshot.password);

    dispatch(LoginAction::SetFieldValidation(
        FieldKind::Email,
        email.clone().into(),
    ));
    dispatch(LoginAction::SetFieldValidation(
        FieldKind::Password,
        password.clone().into(),
    ));

    let first_invalid = match (&email, &password) {
        (Err(_), _) => Some(FieldKind::Email),
        (Ok(()), Err(_)) => Some(FieldKind::Password),
        (Ok(()), Ok(())) => None,
    };

    if let Some(field) = first_invalid {
        debug!(?field, "Login form rejected by field rules");
        dispatch(LoginAction::StartShake);
        dispatch(LoginAction::RequestFocus(field));
        return snapshot.form_state;
    }

    let credentials = snapshot.credentials();
    if contains_suspicious_content(&credentials.email)
        || contains_suspicious_content(&credentials.password)
    {
        warn!("Suspicious content in login credentials");
        report(&dispatch, &LoginError::SuspiciousContent);
        return snapshot.form_state;
    }

    dispatch(LoginAction::SetFormState(FormState::Loading));

    match backend.login(&credentials).await {
        Ok(()) => {
            info!("Login succeeded");
            dispatch(LoginAction::SetFormState(FormState::Success));
            FormState::Success
        }
        Err(e) => {
            warn!(error = %e, "Login failed");
            dispatch(LoginAction::SetFormState(FormState::Error));
            report(&dispatch, &e);
            FormState::Error
        }
    }
}

fn report<D: Fn(LoginAction)>(dispatch: &D, error: &LoginError) {
    dispatch(LoginAction::SetFieldValidation(
        error.field(),
        ValidationResult::fail(error),
    ));
    dispatch(LoginAction::StartShake);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::Credentials;
    use crate::services::config::LoginConfig;
    use crate::services::errors::LoginResult;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;
    use tokio::time::Instant;

    /// Sleeps on the tokio clock for the delay the config would pick
    struct TimedBackend {
        delay: Duration,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl LoginBackend for TimedBackend {
        async fn login(&self, _credentials: &Credentials) -> LoginResult<()> {
            self.calls.set(self.calls.get() + 1);
            tokio::time::sleep(self.delay).await;
            Ok(())
        }
    }

    struct FailingBackend;

    #[async_trait(?Send)]
    impl LoginBackend for FailingBackend {
        async fn login(&self, _credentials: &Credentials) -> LoginResult<()> {
            Err(LoginError::SimulatedTransportFailure {
                reason: "connection reset".to_string(),
            })
        }
    }

    fn backend(config: &LoginConfig, unit: f64) -> TimedBackend {
        TimedBackend {
            delay: config.login_delay(unit),
            calls: Cell::new(0),
        }
    }

    fn filled(email: &str, password: &str) -> LoginState {
        LoginState {
            email: email.to_string(),
            password: password.to_string(),
            ..LoginState::default()
        }
    }

    /// Runs the flow against a live state, the way the page's dispatch does
    async fn run<B: LoginBackend>(state: LoginState, backend: &B) -> (FormState, LoginState, Vec<LoginAction>) {
        let live = RefCell::new(state.clone());
        let log = RefCell::new(Vec::new());
        let end = submit_login(&state, backend, |action| {
            log.borrow_mut().push(action.clone());
            live.borrow_mut().reduce_in_place(action);
        })
        .await;
        (end, live.into_inner(), log.into_inner())
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_valid_credentials_load_then_succeed_within_delay_bound() {
        let config = LoginConfig::default();
        let backend = backend(&config, 0.37);
        let started = Instant::now();

        let (end, state, log) = run(filled("user@example.com", "Abc12345"), &backend).await;

        let elapsed = started.elapsed();
        assert_eq!(end, FormState::Success);
        assert_eq!(state.form_state, FormState::Success);
        assert_eq!(backend.calls.get(), 1);
        assert!(elapsed >= Duration::from_millis(config.login_delay_min_ms));
        assert!(elapsed <= Duration::from_millis(config.login_delay_max_ms));

        let transitions: Vec<_> = log
            .iter()
            .filter_map(|a| match a {
                LoginAction::SetFormState(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(transitions, vec![FormState::Loading, FormState::Success]);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_invalid_email_flags_only_email() {
        let backend = backend(&LoginConfig::default(), 0.0);

        let (end, state, _) = run(filled("a@b", "Abc12345"), &backend).await;

        assert_eq!(end, FormState::Idle);
        assert_eq!(backend.calls.get(), 0);
        assert_eq!(
            state.error_message(FieldKind::Email),
            Some("Please enter a valid email address")
        );
        assert!(!state.has_error(FieldKind::Password));
        assert_eq!(state.password, "Abc12345");
        assert!(state.shaking);
        assert_eq!(state.focus_request, Some(FieldKind::Email));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_focus_goes_to_password_when_only_password_fails() {
        let backend = backend(&LoginConfig::default(), 0.0);

        let (_, state, _) = run(filled("a@b.com", "Password"), &backend).await;

        assert_eq!(state.focus_request, Some(FieldKind::Password));
        assert_eq!(
            state.validations.email,
            Some(ValidationResult::ok())
        );
        assert!(state.has_error(FieldKind::Password));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_suspicious_content_aborts_before_loading() {
        let backend = backend(&LoginConfig::default(), 0.0);

        let (end, state, log) = run(filled("a@b.com", "eval(Abc12345)"), &backend).await;

        assert_eq!(end, FormState::Idle);
        assert_eq!(backend.calls.get(), 0);
        assert_eq!(
            state.error_message(FieldKind::Email),
            Some("Please enter valid credentials")
        );
        assert!(!log.contains(&LoginAction::SetFormState(FormState::Loading)));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_submit_ignored_while_loading() {
        let backend = backend(&LoginConfig::default(), 0.0);
        let mut state = filled("user@example.com", "Abc12345");
        state.form_state = FormState::Loading;

        let (end, _, log) = run(state, &backend).await;

        assert_eq!(end, FormState::Loading);
        assert!(log.is_empty());
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_submit_ignored_while_redirecting_after_success() {
        let backend = backend(&LoginConfig::default(), 0.0);
        let mut state = filled("user@example.com", "Abc12345");
        state.form_state = FormState::Success;

        let (end, after, log) = run(state, &backend).await;

        assert_eq!(end, FormState::Success);
        assert_eq!(after.form_state, FormState::Success);
        assert!(log.is_empty());
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_backend_failure_surfaces_on_email() {
        let (end, state, _) = run(filled("user@example.com", "Abc12345"), &FailingBackend).await;

        assert_eq!(end, FormState::Error);
        assert_eq!(state.form_state, FormState::Error);
        assert_eq!(
            state.error_message(FieldKind::Email),
            Some("Login failed, please try again")
        );
        assert!(state.shaking);
    }
}
