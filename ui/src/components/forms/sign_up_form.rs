//! Sign-up form: four inputs, a submit button and the server's error message

use dioxus::prelude::*;

use crate::components::{
    display::ServerErrorMessage,
    input::{InputType, LabeledInput, PasswordValidationFeedback},
};
use crate::features::sign_up::*;
use crate::services::client::UsersApiHandle;
use crate::console_info;

#[derive(Props, PartialEq, Clone)]
pub struct SignUpFormProps {
    pub state: Signal<SignUpFormState>,
    pub dispatch: EventHandler<SignUpAction>,
}

/// Users API client provided through context by the host app or a test
/// harness, HTTP client built from the global config otherwise
pub fn use_users_api() -> UsersApiHandle {
    use_hook(|| try_consume_context::<UsersApiHandle>().unwrap_or_default())
}

/// Submit `snapshot` in the background and dispatch the outcome
pub fn spawn_submit(
    api: UsersApiHandle,
    snapshot: SignUpFormState,
    dispatch: EventHandler<SignUpAction>,
) {
    spawn(async move {
        let outcome = submit_sign_up(&*api, &snapshot).await;
        dispatch.call(outcome.into_action());
    });
}

#[component]
pub fn SignUpForm(props: SignUpFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let api = use_users_api();

    rsx! {
        div {
            class: "sign-up-form",

            LabeledInput {
                id: "username".to_string(),
                label: "ユーザー名".to_string(),
                value: state().username,
                input_type: InputType::Text,
                on_change: move |data: String| dispatch.call(SignUpAction::SetUsername(data))
            }

            LabeledInput {
                id: "email".to_string(),
                label: "メールアドレス".to_string(),
                value: state().email,
                input_type: InputType::Email,
                on_change: move |data: String| dispatch.call(SignUpAction::SetEmail(data))
            }

            LabeledInput {
                id: "password".to_string(),
                label: "パスワード".to_string(),
                value: state().password,
                input_type: InputType::Password,
                on_change: move |data: String| dispatch.call(SignUpAction::SetPassword(data))
            }

            LabeledInput {
                id: "password-confirmation".to_string(),
                label: "パスワード確認".to_string(),
                value: state().password_confirmation,
                input_type: InputType::Password,
                on_change: move |data: String| {
                    dispatch.call(SignUpAction::SetPasswordConfirmation(data))
                }
            }
            PasswordValidationFeedback { validation: state().validate_passwords() }

            if let Some(hint) = get_sign_up_validation_message(&state()) {
                div {
                    class: "validation-hint",
                    "{hint}"
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "button",
                    disabled: state().phase() != FormPhase::Valid,
                    onclick: move |_| {
                        let snapshot = state();
                        console_info!("[SignUpForm] Submitting sign-up for {}", snapshot.username);
                        dispatch.call(SignUpAction::SubmitStarted);
                        spawn_submit(api.clone(), snapshot, dispatch);
                    },
                    "登録"
                }
            }

            if let Some(message) = state().error_message {
                ServerErrorMessage { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::{ClientError, ClientResult, CreateUserRequest, UsersApi};
    use async_trait::async_trait;
    use dioxus::dioxus_core::NoOpMutations;
    use std::time::Duration;

    const SERVER_ERROR: &str = "サーバーエラーです。時間を置いて試してください。";

    struct RejectingUsersApi;

    #[async_trait(?Send)]
    impl UsersApi for RejectingUsersApi {
        async fn create_user(&self, _request: &CreateUserRequest) -> ClientResult<()> {
            Err(ClientError::ServerRejection {
                status: 500,
                message: SERVER_ERROR.to_string(),
            })
        }
    }

    fn form_state(username: &str, confirmation: &str) -> SignUpFormState {
        SignUpFormState {
            username: username.to_string(),
            email: "user@example.com".to_string(),
            password: "P4ssw0rd".to_string(),
            password_confirmation: confirmation.to_string(),
            ..Default::default()
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn MatchingForm() -> Element {
        let mut state = use_signal(|| form_state("User", "P4ssw0rd"));
        let dispatch = EventHandler::new(move |action: SignUpAction| {
            state.with_mut(|s| s.reduce_in_place(action));
        });
        rsx! { SignUpForm { state, dispatch } }
    }

    #[component]
    fn MismatchedForm() -> Element {
        let mut state = use_signal(|| form_state("User", "password"));
        let dispatch = EventHandler::new(move |action: SignUpAction| {
            state.with_mut(|s| s.reduce_in_place(action));
        });
        rsx! { SignUpForm { state, dispatch } }
    }

    #[component]
    fn SubmitOnMount(state: Signal<SignUpFormState>, dispatch: EventHandler<SignUpAction>) -> Element {
        let api = use_users_api();
        use_hook(move || spawn_submit(api, (*state.peek()).clone(), dispatch));
        rsx! {}
    }

    #[component]
    fn RejectingHarness() -> Element {
        use_context_provider(|| UsersApiHandle::new(RejectingUsersApi));
        let mut state = use_signal(|| form_state("Error1", "P4ssw0rd"));
        let dispatch = EventHandler::new(move |action: SignUpAction| {
            state.with_mut(|s| s.reduce_in_place(action));
        });
        rsx! {
            SignUpForm { state, dispatch }
            SubmitOnMount { state, dispatch }
        }
    }

    #[test]
    fn test_matching_form_enables_submit() {
        let html = render(MatchingForm);
        assert!(html.contains(">登録</button>"));
        assert!(!html.contains("disabled=true"));
    }

    #[test]
    fn test_mismatch_is_reported_once() {
        let html = render(MismatchedForm);
        assert_eq!(html.matches("パスワードが一致しません").count(), 1);
        assert!(html.contains("validation-feedback no-match"));
        assert!(!html.contains("validation-hint"));
        assert!(html.contains("disabled=true"));
    }

    #[tokio::test]
    async fn test_injected_client_rejection_renders_alert() {
        let mut dom = VirtualDom::new(RejectingHarness);
        dom.rebuild_in_place();

        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("submit task should finish");
        dom.render_immediate(&mut NoOpMutations);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(&format!(r#"role="alert">{SERVER_ERROR}</div>"#)));
        // A rejection leaves the fields as typed, so submit stays enabled
        assert!(!html.contains("disabled=true"));
    }
}
