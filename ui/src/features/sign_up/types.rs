// Core types for the sign-up form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Local state owned by a mounted sign-up form
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SignUpFormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    /// Message returned by the server on the last failed submit
    pub error_message: Option<String>,
    /// Set once the server has accepted a submit
    pub registered: bool,
}

/// Phase of the form, derived purely from field validity
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormPhase {
    /// At least one field is empty or the passwords differ
    Idle,
    /// Submit control is enabled
    Valid,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PasswordValidation {
    None,
    Match,
    NoMatch,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SignUpAction {
    SetUsername(String),
    SetEmail(String),
    SetPassword(String),
    SetPasswordConfirmation(String),
    SubmitStarted,
    /// Carries the state that was submitted
    SubmitSucceeded(SignUpFormState),
    SubmitFailed(String),
}

impl SignUpFormState {
    pub fn error_shown(&self) -> bool {
        self.error_message.is_some()
    }

    /// Whether the four input fields hold the same values as `other`
    pub fn same_fields(&self, other: &SignUpFormState) -> bool {
        self.username == other.username
            && self.email == other.email
            && self.password == other.password
            && self.password_confirmation == other.password_confirmation
    }

    /// Apply an action without replacing the state value, so a Dioxus
    /// signal holding it stays the same allocation.
    pub fn reduce_in_place(&mut self, action: SignUpAction) {
        match action {
            SignUpAction::SetUsername(username) => {
                self.username = username;
            }
            SignUpAction::SetEmail(email) => {
                self.email = email;
            }
            SignUpAction::SetPassword(password) => {
                self.password = password;
            }
            SignUpAction::SetPasswordConfirmation(confirmation) => {
                self.password_confirmation = confirmation;
            }
            SignUpAction::SubmitStarted => {
                self.error_message = None;
                self.registered = false;
            }
            SignUpAction::SubmitSucceeded(submitted) => {
                // Edits typed while the request was in flight are kept
                if self.same_fields(&submitted) {
                    self.username.clear();
                    self.email.clear();
                    self.password.clear();
                    self.password_confirmation.clear();
                }
                self.error_message = None;
                self.registered = true;
            }
            SignUpAction::SubmitFailed(message) => {
                self.error_message = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> SignUpFormState {
        let mut state = SignUpFormState::default();
        state.reduce_in_place(SignUpAction::SetUsername("User".to_string()));
        state.reduce_in_place(SignUpAction::SetEmail("user@example.com".to_string()));
        state.reduce_in_place(SignUpAction::SetPassword("P4ssw0rd".to_string()));
        state.reduce_in_place(SignUpAction::SetPasswordConfirmation(
            "P4ssw0rd".to_string(),
        ));
        state
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = SignUpFormState::default();
        assert!(state.username.is_empty());
        assert!(state.email.is_empty());
        assert!(state.password.is_empty());
        assert!(state.password_confirmation.is_empty());
        assert!(!state.error_shown());
        assert!(!state.registered);

        // Every mount starts from the same state
        assert_eq!(state, SignUpFormState::default());
    }

    #[test]
    fn test_field_actions_set_fields() {
        let state = filled_state();
        assert_eq!(state.username, "User");
        assert_eq!(state.email, "user@example.com");
        assert_eq!(state.password, "P4ssw0rd");
        assert_eq!(state.password_confirmation, "P4ssw0rd");
    }

    #[test]
    fn test_failed_submit_keeps_fields_and_shows_message() {
        let mut state = filled_state();
        state.reduce_in_place(SignUpAction::SubmitStarted);
        state.reduce_in_place(SignUpAction::SubmitFailed("boom".to_string()));

        assert_eq!(state.error_message.as_deref(), Some("boom"));
        assert_eq!(state.username, "User");
        assert!(!state.registered);
    }

    #[test]
    fn test_next_submit_clears_error() {
        let mut state = filled_state();
        state.reduce_in_place(SignUpAction::SubmitFailed("boom".to_string()));
        assert!(state.error_shown());

        state.reduce_in_place(SignUpAction::SubmitStarted);
        assert!(!state.error_shown());
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut state = filled_state();
        state.reduce_in_place(SignUpAction::SubmitFailed("boom".to_string()));
        state.reduce_in_place(SignUpAction::SubmitStarted);
        let submitted = state.clone();
        state.reduce_in_place(SignUpAction::SubmitSucceeded(submitted));

        assert!(state.registered);
        assert!(!state.error_shown());
        assert!(state.username.is_empty());
        assert!(state.password_confirmation.is_empty());
    }

    #[test]
    fn test_success_keeps_edits_made_during_request() {
        let mut state = filled_state();
        state.reduce_in_place(SignUpAction::SubmitStarted);
        let submitted = state.clone();

        state.reduce_in_place(SignUpAction::SetEmail("other@example.com".to_string()));
        state.reduce_in_place(SignUpAction::SubmitSucceeded(submitted));

        assert!(state.registered);
        assert_eq!(state.username, "User");
        assert_eq!(state.email, "other@example.com");
        assert_eq!(state.password_confirmation, "P4ssw0rd");
    }
}
