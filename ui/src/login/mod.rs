//! Login Form Logic
//!
//! Everything the login page decides, kept free of DOM access:
//!
//! - **types**: form state, field kinds, actions and the reducer
//! - **validation**: email/password rules and the suspicious-content guard
//! - **flow**: the submit handler driving Idle -> Loading -> Success | Error
//! - **focus_trap**: Tab wrapping inside the page

pub mod flow;
pub mod focus_trap;
pub mod types;
pub mod validation;

pub use flow::submit_login;
pub use focus_trap::*;
pub use types::*;
pub use validation::*;
