use crate::{console_debug, console_info};
use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::components::display::SuccessMessage;
use crate::components::forms::LoginForm;
use crate::login::{submit_login, FormState, LoginAction, LoginState};
use crate::services::client::SimulatedBackend;
use crate::services::config::LoginConfig;
use crate::utils::{
    focus_element, navigate_to, navigation_load_time_ms, on_page_loaded, random_unit, trap_tab_focus,
};

const LOGIN_PAGE_CSS: Asset = asset!("/assets/styling/login_page.css");

/// Id of the element Tab focus is trapped inside
pub const CONTAINER_ID: &str = "login-container";

#[component]
pub fn LoginPage(config: LoginConfig) -> Element {
    // The one owned copy of the form state
    let mut state = use_signal(LoginState::default);
    let mut loaded = use_signal(|| false);
    let mut in_flight = use_signal(|| false);

    // Dispatch function for actions - in-place reduction keeps Signal reactivity
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    use_effect(move || {
        loaded.set(true);
        on_page_loaded(|| match navigation_load_time_ms() {
            Some(ms) => console_info!("[Login] Page load time: {:.0} ms", ms),
            None => console_info!("[Login] Page load time unavailable"),
        });
    });

    let focus_request = use_memo(move || state.read().focus_request);
    use_effect(move || {
        if let Some(field) = focus_request() {
            focus_element(field.input_id());
            dispatch.call(LoginAction::ClearFocusRequest);
        }
    });

    let shaking = use_memo(move || state.read().shaking);
    let shake_duration = config.shake_duration();
    use_effect(move || {
        if shaking() {
            spawn(async move {
                sleep(shake_duration).await;
                dispatch.call(LoginAction::StopShake);
            });
        }
    });

    let submit_config = config.clone();
    let on_submit = move |_: ()| {
        if in_flight() {
            console_debug!("[Login] Submit ignored, previous submission still running");
            return;
        }
        in_flight.set(true);

        let snapshot = state();
        let config = submit_config.clone();
        spawn(async move {
            let backend = SimulatedBackend::from_config(&config, random_unit());
            console_debug!(
                "[Login] Submitting with {} ms simulated delay",
                backend.delay().as_millis()
            );

            let outcome = submit_login(&snapshot, &backend, |action| dispatch.call(action)).await;
            in_flight.set(false);

            if outcome == FormState::Success {
                console_info!("[Login] Login successful, redirecting to {}", config.redirect_href);
                sleep(config.redirect_delay()).await;
                navigate_to(&config.redirect_href);
            }
        });
    };

    let on_keydown = move |event: KeyboardEvent| {
        if event.key() == Key::Tab {
            let backwards = event.modifiers().contains(Modifiers::SHIFT);
            if trap_tab_focus(CONTAINER_ID, backwards) {
                event.prevent_default();
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_PAGE_CSS }

        div {
            id: CONTAINER_ID,
            class: if loaded() { "container loaded" } else { "container" },
            onkeydown: on_keydown,

            div {
                class: "login-card",

                div {
                    class: "login-header",
                    h1 {
                        class: "login-title",
                        "Welcome back"
                    }
                    p {
                        class: "login-subtitle",
                        "Sign in to continue learning"
                    }
                }

                if state().form_state == FormState::Success {
                    SuccessMessage {
                        reveal_delay: config.success_reveal_delay()
                    }
                }

                LoginForm {
                    state: state,
                    dispatch: dispatch,
                    on_submit: on_submit
                }
            }
        }
    }
}
