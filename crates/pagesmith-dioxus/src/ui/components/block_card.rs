use dioxus::prelude::*;
use pagesmith_engine::{Block, BlockContent, Cmd, MediaKind};

use super::{LinkBlockView, MediaPreview, TextBlockEditor};

/// Card wrapping one block in the builder, with its delete control
#[component]
pub fn BlockCard(block: Block, on_command: Callback<Cmd>) -> Element {
    let id = block.id();
    let kind = block.kind().label();

    let body = match block.body() {
        BlockContent::Text(text) => rsx! {
            TextBlockEditor { id, text: text.clone(), on_command }
        },
        BlockContent::Image(media) => rsx! {
            MediaPreview { kind: MediaKind::Image, src: media.src.clone() }
        },
        BlockContent::Video(media) => rsx! {
            MediaPreview { kind: MediaKind::Video, src: media.src.clone() }
        },
        BlockContent::Link(link) => rsx! {
            LinkBlockView { id, link: link.clone(), on_command }
        },
    };

    rsx! {
        div {
            class: "block-card",
            div {
                class: "block-card-header",
                span { class: "block-kind", "{kind}" }
                button {
                    class: "delete-button",
                    title: "Delete block",
                    onclick: move |_| on_command.call(Cmd::Delete { id }),
                    "✕"
                }
            }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pagesmith_engine::{BlockKind, BlockStore};

    #[component]
    fn Harness(block: Block) -> Element {
        rsx! {
            BlockCard { block, on_command: move |_| {} }
        }
    }

    fn render_card(kind: BlockKind, content: &str) -> String {
        let mut store = BlockStore::new();
        let block = store.add_block(kind, Some(content.to_string())).clone();
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_every_card_has_delete_button() {
        for kind in [
            BlockKind::Text,
            BlockKind::Image,
            BlockKind::Video,
            BlockKind::Link,
        ] {
            let html = render_card(kind, "https://example.com/a");
            assert!(html.contains("delete-button"), "{kind:?} card has no delete");
            assert!(html.contains(kind.label()));
        }
    }

    #[test]
    fn test_text_card_shows_editor_and_preview() {
        let html = render_card(BlockKind::Text, "<h1>Welcome</h1>");

        assert!(html.contains("text-editor"));
        assert!(html.contains("<h1>Welcome</h1>"));
    }

    #[test]
    fn test_image_card_shows_image() {
        let html = render_card(BlockKind::Image, "data:image/gif;base64,R0lG");

        assert!(html.contains("<img"));
        assert!(html.contains("data:image/gif;base64,R0lG"));
    }
}
