use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LabeledInputProps {
    /// Element id, also ties the label to the input
    pub id: String,
    pub label: String,
    pub value: String,
    pub input_type: InputType,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
