pub mod registration_notice;
pub mod server_error;

pub use registration_notice::*;
pub use server_error::*;
