use dioxus::prelude::*;
use gloo_timers::future::sleep;
use std::time::Duration;

#[derive(Props, PartialEq, Clone)]
pub struct SuccessMessageProps {
    /// Delay before the fade-in class is applied
    pub reveal_delay: Duration,
}

#[component]
pub fn SuccessMessage(props: SuccessMessageProps) -> Element {
    let mut shown = use_signal(|| false);
    let reveal_delay = props.reveal_delay;

    use_effect(move || {
        spawn(async move {
            sleep(reveal_delay).await;
            shown.set(true);
        });
    });

    rsx! {
        div {
            class: if shown() { "success-message show" } else { "success-message" },
            role: "status",
            aria_live: "polite",
            svg {
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                path {
                    d: "M20 6L9 17l-5-5",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
            }
            span { "Login successful! Redirecting..." }
        }
    }
}
