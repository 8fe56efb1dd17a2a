// Client-side login backend
//
// The form talks to a `LoginBackend`; today the only implementation is a
// timer that stands in for a network round trip.

pub mod simulated_login;

pub use simulated_login::{LoginBackend, SimulatedBackend};
