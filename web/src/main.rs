use dioxus::prelude::*;
use ui::services::client::UsersApiHandle;
use ui::services::config::{init_global_config, SignUpConfig};
use ui::SignUpPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // The API is served from the page's own origin
    init_global_config(SignUpConfig::default());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(UsersApiHandle::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    SignUp {},
}

#[component]
fn Home() -> Element {
    rsx! {
        SignUpPage {}
    }
}

#[component]
fn SignUp() -> Element {
    rsx! {
        SignUpPage {}
    }
}
