use tracing::{info, instrument, warn};

use crate::features::sign_up::types::{SignUpAction, SignUpFormState};
use crate::services::client::{ClientError, CreateUserRequest, UsersApi};

/// Result of one submit of the sign-up form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Accepted; carries the submitted state
    Registered(SignUpFormState),
    Rejected(ClientError),
}

impl SubmitOutcome {
    /// Action to dispatch to the form state for this outcome
    pub fn into_action(self) -> SignUpAction {
        match self {
            SubmitOutcome::Registered(submitted) => SignUpAction::SubmitSucceeded(submitted),
            SubmitOutcome::Rejected(err) => SignUpAction::SubmitFailed(err.display_message()),
        }
    }
}

/// Send the form's credentials to the users API.
///
/// Issues exactly one request; there is no retry.
#[instrument(skip_all, fields(username = %state.username))]
pub async fn submit_sign_up(api: &dyn UsersApi, state: &SignUpFormState) -> SubmitOutcome {
    let request = CreateUserRequest::from(state);

    match api.create_user(&request).await {
        Ok(()) => {
            info!("Sign-up accepted for {}", request.username);
            SubmitOutcome::Registered(state.clone())
        }
        Err(err) => {
            warn!(
                status = ?err.status(),
                "Sign-up failed for {}: {}",
                request.username,
                err
            );
            SubmitOutcome::Rejected(err)
        }
    }
}
