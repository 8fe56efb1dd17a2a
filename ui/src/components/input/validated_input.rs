use dioxus::prelude::*;

use crate::login::FieldKind;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub field: FieldKind,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub autocomplete: String,
    pub has_error: bool,
    pub on_change: EventHandler<String>,
    pub on_focus: EventHandler<()>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let field = props.field;

    rsx! {
        input {
            id: field.input_id(),
            name: field.input_id(),
            class: if props.has_error { "input-field error" } else { "input-field" },
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            autocomplete: "{props.autocomplete}",
            maxlength: "{field.max_len()}",
            required: true,
            aria_invalid: "{props.has_error}",
            aria_describedby: field.error_id(),
            oninput: move |event| props.on_change.call(event.value()),
            onfocus: move |_| props.on_focus.call(()),
            onblur: move |_| props.on_blur.call(())
        }
    }
}
