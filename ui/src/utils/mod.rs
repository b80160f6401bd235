//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging macros for browser console output
//! - **platform**: browser environment helpers

pub mod console_macros;
pub mod platform;

pub use platform::*;
