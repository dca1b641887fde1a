use dioxus::prelude::*;

/// Placeholder for a page with no blocks. Only ever shown in the builder.
#[component]
pub fn EmptyDocument(on_add_text: Callback<()>) -> Element {
    rsx! {
        div {
            class: "empty-document",
            p { "Your page is empty. Add a block from the toolbar to get started." }
            button {
                class: "add-block-button",
                onclick: move |_| on_add_text.call(()),
                "Add first text block +"
            }
        }
    }
}
