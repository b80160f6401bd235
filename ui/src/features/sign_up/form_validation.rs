use crate::features::sign_up::types::*;

impl SignUpFormState {
    pub fn validate_passwords(&self) -> PasswordValidation {
        if self.password_confirmation.is_empty() {
            PasswordValidation::None
        } else if self.password == self.password_confirmation {
            PasswordValidation::Match
        } else {
            PasswordValidation::NoMatch
        }
    }

    pub fn phase(&self) -> FormPhase {
        if validate_sign_up_complete(self) {
            FormPhase::Valid
        } else {
            FormPhase::Idle
        }
    }
}

/// Validates that all four fields are filled and the passwords match.
/// This alone decides whether the submit control is enabled.
pub fn validate_sign_up_complete(state: &SignUpFormState) -> bool {
    !state.username.is_empty()
        && !state.email.is_empty()
        && !state.password.is_empty()
        && !state.password_confirmation.is_empty()
        && state.password == state.password_confirmation
}

/// Gets a hint for the first empty field. A password mismatch is reported
/// by the confirmation feedback instead.
pub fn get_sign_up_validation_message(state: &SignUpFormState) -> Option<String> {
    if state.username.is_empty() {
        return Some("ユーザー名を入力してください".to_string());
    }

    if state.email.is_empty() {
        return Some("メールアドレスを入力してください".to_string());
    }

    if state.password.is_empty() {
        return Some("パスワードを入力してください".to_string());
    }

    if state.password_confirmation.is_empty() {
        return Some("パスワード確認を入力してください".to_string());
    }

    None
}
