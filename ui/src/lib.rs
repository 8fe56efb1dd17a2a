//! This crate contains the login page: form logic, validation rules and the
//! Dioxus components that render them.

pub mod app;
pub use app::LoginPage;

pub mod components;
pub mod login;
pub mod services;
pub mod utils;

#[doc(hidden)]
pub mod __macro_support {
    pub use gloo_console;
    pub use js_sys;
}
