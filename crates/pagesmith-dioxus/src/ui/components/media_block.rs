use dioxus::prelude::*;
use pagesmith_engine::MediaKind;

#[component]
pub fn MediaPreview(kind: MediaKind, src: String) -> Element {
    match kind {
        MediaKind::Image => rsx! {
            img { class: "media-preview", src: "{src}", alt: "" }
        },
        MediaKind::Video => rsx! {
            video { class: "media-preview", src: "{src}", controls: true }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_media(kind: MediaKind) -> String {
        let mut dom = VirtualDom::new_with_props(
            MediaPreview,
            MediaPreviewProps {
                kind,
                src: "data:image/png;base64,aGVsbG8=".to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_image_renders_img() {
        let html = render_media(MediaKind::Image);

        assert!(html.starts_with("<img"));
        assert!(html.contains("data:image/png;base64,aGVsbG8="));
    }

    #[test]
    fn test_video_renders_video() {
        let html = render_media(MediaKind::Video);

        assert!(html.starts_with("<video"));
        assert!(html.contains("controls"));
    }
}
