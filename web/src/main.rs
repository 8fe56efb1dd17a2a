use dioxus::prelude::*;
use login_ui::services::config::LoginConfig;
use login_ui::{console_warn, LoginPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const LOGIN_CONFIG_JSON: &str = include_str!("../config/login.json");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> LoginConfig {
    match LoginConfig::from_json(LOGIN_CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            console_warn!("{} - falling back to defaults", e);
            LoginConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let config = use_hook(load_config);

    rsx! {
        main {
            LoginPage { config: config }
        }
    }
}
