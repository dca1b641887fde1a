use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message shown in the banner until dismissed or replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[component]
pub fn Notification(notice: Notice, on_dismiss: Callback<()>) -> Element {
    let class = match notice.level {
        NoticeLevel::Info => "notification notification-info",
        NoticeLevel::Error => "notification notification-error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            span { class: "notification-message", "{notice.message}" }
            button {
                class: "notification-dismiss",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(notice: Notice) -> Element {
        rsx! {
            Notification { notice, on_dismiss: move |_| {} }
        }
    }

    fn render_notice(notice: Notice) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { notice });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_error_notice_uses_error_class() {
        let html = render_notice(Notice::error("Please enter a URL"));

        assert!(html.contains("notification-error"));
        assert!(html.contains("Please enter a URL"));
    }

    #[test]
    fn test_info_notice_uses_info_class() {
        let html = render_notice(Notice::info("Exported landing-page.html"));

        assert!(html.contains("notification-info"));
        assert!(!html.contains("notification-error"));
    }
}
