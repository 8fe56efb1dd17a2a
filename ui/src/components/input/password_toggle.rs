use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PasswordToggleProps {
    pub visible: bool,
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn PasswordToggle(props: PasswordToggleProps) -> Element {
    let label = if props.visible { "Hide password" } else { "Show password" };

    rsx! {
        button {
            r#type: "button",
            class: "toggle-password",
            aria_label: label,
            aria_controls: "password",
            onclick: move |_| props.on_toggle.call(()),

            svg {
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                if props.visible {
                    // Eye with a slash: the password is currently readable
                    path {
                        d: "M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19m-6.72-1.07a3 3 0 1 1-4.24-4.24",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                    line {
                        x1: "1",
                        y1: "1",
                        x2: "23",
                        y2: "23",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                } else {
                    path {
                        d: "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                    circle {
                        cx: "12",
                        cy: "12",
                        r: "3",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                }
            }
        }
    }
}
