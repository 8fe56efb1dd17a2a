pub mod loading_indicator;
pub mod success_message;

pub use loading_indicator::*;
pub use success_message::*;
