pub mod form_validation;
pub mod submit;
pub mod types;

pub use form_validation::*;
pub use submit::*;
pub use types::*;
