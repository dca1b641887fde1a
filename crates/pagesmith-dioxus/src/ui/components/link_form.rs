use dioxus::html::Key;
use dioxus::prelude::*;
use pagesmith_engine::LinkForm;

/// Modal collecting a link URL and optional label.
///
/// Closing always reports a [`LinkForm`], cancelled or submitted; deciding what
/// to do with it is left to the caller.
#[component]
pub fn LinkFormDialog(on_close: Callback<LinkForm>) -> Element {
    let mut url = use_signal(String::new);
    let mut link_text = use_signal(String::new);

    let submit = move || {
        on_close.call(LinkForm::submitted(url.read().clone(), link_text.read().clone()));
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onkeydown: move |event: Event<KeyboardData>| match event.key() {
                Key::Escape => on_close.call(LinkForm::cancelled()),
                Key::Enter => submit(),
                _ => {}
            },
            div {
                class: "modal",
                h3 { "Add link" }
                label {
                    "URL"
                    input {
                        r#type: "url",
                        placeholder: "https://",
                        autofocus: true,
                        value: "{url}",
                        oninput: move |event: Event<FormData>| url.set(event.value()),
                    }
                }
                label {
                    "Link text (optional)"
                    input {
                        r#type: "text",
                        value: "{link_text}",
                        oninput: move |event: Event<FormData>| link_text.set(event.value()),
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "secondary-button",
                        onclick: move |_| on_close.call(LinkForm::cancelled()),
                        "Cancel"
                    }
                    button {
                        class: "primary-button",
                        onclick: move |_| submit(),
                        "Create link"
                    }
                }
            }
        }
    }
}
