//! User Interface Components
//!
//! - **forms**: the sign-up form
//! - **input**: labeled inputs and validation feedback
//! - **display**: server error display

pub mod display;
pub mod forms;
pub mod input;
