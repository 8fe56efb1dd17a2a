pub mod password_toggle;
pub mod validated_input;
pub mod validation_feedback;

pub use password_toggle::*;
pub use validated_input::*;
pub use validation_feedback::*;
