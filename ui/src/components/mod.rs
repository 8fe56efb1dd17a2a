//! User Interface Components
//!
//! Reusable Dioxus components for the login page:
//!
//! - **forms**: the login form itself
//! - **display**: loading spinner and success banner
//! - **input**: validated inputs, error regions and the password toggle

pub mod display;
pub mod forms;
pub mod input;
