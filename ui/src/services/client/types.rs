use serde::{Deserialize, Serialize};

use crate::features::sign_up::SignUpFormState;

/// Body of `POST /api/v1/users`. The password confirmation never leaves the form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&SignUpFormState> for CreateUserRequest {
    fn from(state: &SignUpFormState) -> Self {
        Self {
            username: state.username.clone(),
            email: state.email.clone(),
            password: state.password.clone(),
        }
    }
}

/// Error envelope returned by the API on failure
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub message: String,
}
