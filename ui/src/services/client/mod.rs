// Client for the users API
//
// The sign-up form depends on the `UsersApi` trait only; the HTTP
// implementation is the default and tests substitute their own.

pub mod errors;
pub mod types;
pub mod users_client;

pub use errors::{ClientError, ClientResult, FALLBACK_ERROR_MESSAGE};
pub use types::{ApiErrorBody, ApiErrorResponse, CreateUserRequest};
pub use users_client::{interpret_response, HttpUsersClient, UsersApi, UsersApiHandle};
