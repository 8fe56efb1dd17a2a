use dioxus::prelude::*;

use crate::login::FieldKind;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub field: FieldKind,
    pub message: Option<String>,
}

/// Error region under an input; always rendered so `aria-describedby` resolves
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                id: props.field.error_id(),
                class: "error-message show",
                role: "alert",
                aria_live: "polite",
                "{message}"
            }
        },
        None => rsx! {
            div {
                id: props.field.error_id(),
                class: "error-message",
                role: "alert",
                aria_live: "polite",
            }
        },
    }
}
