//! Infrastructure Services
//!
//! - **client**: the login backend trait and its simulated implementation
//! - **config**: timing and navigation settings for the login page
//! - **errors**: login and configuration error types
//!
//! WASM-first: async traits carry no Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
