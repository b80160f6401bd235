use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ServerErrorMessageProps {
    pub message: String,
}

/// Error returned by the server, shown verbatim
#[component]
pub fn ServerErrorMessage(props: ServerErrorMessageProps) -> Element {
    rsx! {
        div {
            class: "server-error",
            role: "alert",
            "{props.message}"
        }
    }
}
