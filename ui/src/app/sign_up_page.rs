use dioxus::prelude::*;

use crate::components::{display::RegistrationNotice, forms::SignUpForm};
use crate::features::sign_up::{SignUpAction, SignUpFormState};

#[component]
pub fn SignUpPage() -> Element {
    // State lives for as long as the page is mounted
    let mut state = use_signal(SignUpFormState::default);

    // In-place reduction keeps the signal's value and its subscribers
    let dispatch = EventHandler::new(move |action: SignUpAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        div {
            class: "sign-up-container",

            h1 {
                class: "sign-up-title",
                "Sign Up"
            }

            SignUpForm {
                state: state,
                dispatch: dispatch
            }

            if state().registered {
                RegistrationNotice {}
            }
        }
    }
}
