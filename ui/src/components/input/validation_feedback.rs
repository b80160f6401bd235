use crate::features::sign_up::PasswordValidation;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PasswordValidationFeedbackProps {
    pub validation: PasswordValidation,
}

#[component]
pub fn PasswordValidationFeedback(props: PasswordValidationFeedbackProps) -> Element {
    match props.validation {
        PasswordValidation::Match => rsx! {
            div {
                class: "validation-feedback match",
                "✓ パスワードが一致しています"
            }
        },
        PasswordValidation::NoMatch => rsx! {
            div {
                class: "validation-feedback no-match",
                "⚠ パスワードが一致しません"
            }
        },
        PasswordValidation::None => rsx! { div {} },
    }
}
