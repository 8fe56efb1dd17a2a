//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **dom**: focus, navigation and timing helpers over `web_sys`

pub mod console_macros;
pub mod dom;

pub use dom::*;
