//! This crate contains the sign-up page and everything it depends on.

pub mod app;
pub use app::SignUpPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
