use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub visible: bool,
}

/// Spinner shown inside the submit button while a login is in flight
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-spinner",
            aria_hidden: "true",
            style: if props.visible { "display: block;" } else { "display: none;" },
        }
    }
}
