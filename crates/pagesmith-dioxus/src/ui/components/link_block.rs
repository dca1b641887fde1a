use dioxus::prelude::*;
use pagesmith_engine::{BlockId, Cmd, LinkBlock};

#[component]
pub fn LinkBlockView(id: BlockId, link: LinkBlock, on_command: Callback<Cmd>) -> Element {
    let display_text = link.display_text.clone().unwrap_or_default();
    let link_label = link.label().to_string();

    rsx! {
        div {
            class: "link-block",
            a {
                class: "link-preview",
                href: "{link.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{link_label}"
            }
            label {
                class: "link-text-field",
                "Link text "
                input {
                    r#type: "text",
                    value: "{display_text}",
                    placeholder: "{link.url}",
                    onchange: move |event: Event<FormData>| {
                        let value = event.value().trim().to_string();
                        on_command.call(Cmd::SetLinkText {
                            id,
                            display_text: (!value.is_empty()).then_some(value),
                        });
                    },
                }
            }
        }
    }
}
