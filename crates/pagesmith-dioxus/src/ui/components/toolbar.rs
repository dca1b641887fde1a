use dioxus::prelude::*;
use pagesmith_engine::MediaKind;

#[component]
pub fn Toolbar(
    block_count: usize,
    on_add_text: Callback<()>,
    on_add_media: Callback<MediaKind>,
    on_add_link: Callback<()>,
    on_export: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "toolbar",
            div {
                class: "toolbar-group",
                button {
                    class: "toolbar-button",
                    onclick: move |_| on_add_text.call(()),
                    "Text"
                }
                button {
                    class: "toolbar-button",
                    onclick: move |_| on_add_media.call(MediaKind::Image),
                    "Image"
                }
                button {
                    class: "toolbar-button",
                    onclick: move |_| on_add_media.call(MediaKind::Video),
                    "Video"
                }
                button {
                    class: "toolbar-button",
                    onclick: move |_| on_add_link.call(()),
                    "Link"
                }
            }
            span { class: "block-count", "{block_count} blocks" }
            button {
                class: "toolbar-button export-button",
                onclick: move |_| on_export.call(()),
                "Export HTML"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn harness() -> Element {
        rsx! {
            Toolbar {
                block_count: 3,
                on_add_text: move |_| {},
                on_add_media: move |_| {},
                on_add_link: move |_| {},
                on_export: move |_| {},
            }
        }
    }

    #[test]
    fn test_toolbar_lists_every_action() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = render(&dom);

        for label in ["Text", "Image", "Video", "Link", "Export HTML"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("3 blocks"));
    }
}
