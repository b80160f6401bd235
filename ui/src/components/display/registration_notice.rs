use dioxus::prelude::*;

/// Shown once the server has accepted the sign-up
#[component]
pub fn RegistrationNotice() -> Element {
    rsx! {
        div {
            class: "registration-notice",
            role: "status",
            "✓ 登録が完了しました"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_is_a_status_region() {
        let mut dom = VirtualDom::new(RegistrationNotice);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"role="status">✓ 登録が完了しました</div>"#));
    }
}
