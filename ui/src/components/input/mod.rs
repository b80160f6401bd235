pub mod labeled_input;
pub mod validation_feedback;

pub use labeled_input::*;
pub use validation_feedback::*;
