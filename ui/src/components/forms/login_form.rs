use dioxus::prelude::*;

use crate::components::{
    display::LoadingIndicator,
    input::{FieldError, InputType, PasswordToggle, ValidatedInput},
};
use crate::login::{FieldKind, LoginAction, LoginState};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    pub state: Signal<LoginState>,
    pub dispatch: EventHandler<LoginAction>,
    pub on_submit: EventHandler<()>,
}

fn wrapper_class(state: &LoginState, field: FieldKind) -> &'static str {
    if state.focused == Some(field) {
        "input-wrapper focused"
    } else {
        "input-wrapper"
    }
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;

    let current = state();
    // Stays busy through the redirect after a successful login
    let loading = current.form_state.is_locked();
    let password_type = if current.password_visible {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        form {
            id: "loginForm",
            class: if current.shaking { "login-form shake" } else { "login-form" },
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_submit.call(());
            },

            // Email Input Section
            div {
                class: "form-group",
                label {
                    class: "input-label",
                    r#for: FieldKind::Email.input_id(),
                    "Email"
                }
                div {
                    class: wrapper_class(&current, FieldKind::Email),
                    ValidatedInput {
                        field: FieldKind::Email,
                        value: current.email.clone(),
                        placeholder: "you@example.com".to_string(),
                        input_type: InputType::Email,
                        autocomplete: "email".to_string(),
                        has_error: current.has_error(FieldKind::Email),
                        on_change: move |data: String| dispatch.call(LoginAction::SetEmail(data)),
                        on_focus: move |_| dispatch.call(LoginAction::FocusField(FieldKind::Email)),
                        on_blur: move |_| dispatch.call(LoginAction::BlurField(FieldKind::Email)),
                    }
                }
                FieldError {
                    field: FieldKind::Email,
                    message: current.error_message(FieldKind::Email).map(str::to_string),
                }
            }

            // Password Input Section
            div {
                class: "form-group",
                label {
                    class: "input-label",
                    r#for: FieldKind::Password.input_id(),
                    "Password"
                }
                div {
                    class: wrapper_class(&current, FieldKind::Password),
                    ValidatedInput {
                        field: FieldKind::Password,
                        value: current.password.clone(),
                        placeholder: "Enter your password".to_string(),
                        input_type: password_type,
                        autocomplete: "current-password".to_string(),
                        has_error: current.has_error(FieldKind::Password),
                        on_change: move |data: String| dispatch.call(LoginAction::SetPassword(data)),
                        on_focus: move |_| dispatch.call(LoginAction::FocusField(FieldKind::Password)),
                        on_blur: move |_| dispatch.call(LoginAction::BlurField(FieldKind::Password)),
                    }
                    PasswordToggle {
                        visible: current.password_visible,
                        on_toggle: move |_| dispatch.call(LoginAction::TogglePasswordVisibility),
                    }
                }
                FieldError {
                    field: FieldKind::Password,
                    message: current.error_message(FieldKind::Password).map(str::to_string),
                }
            }

            // Submit Button
            button {
                r#type: "submit",
                class: if loading { "btn-primary loading" } else { "btn-primary" },
                disabled: loading,
                aria_busy: "{loading}",
                span {
                    class: "btn-text",
                    style: if loading { "opacity: 0;" } else { "opacity: 1;" },
                    "Sign in"
                }
                LoadingIndicator { visible: loading }
            }
        }
    }
}
