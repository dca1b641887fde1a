use dioxus::html::Key;
use dioxus::prelude::*;
use pagesmith_engine::MediaKind;

/// Asks for the path of a local image or video file. `None` means cancelled.
#[component]
pub fn MediaPathForm(kind: MediaKind, on_close: Callback<Option<String>>) -> Element {
    let mut path = use_signal(String::new);

    let accept = kind.accept();
    let title = match kind {
        MediaKind::Image => "Add image",
        MediaKind::Video => "Add video",
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onkeydown: move |event: Event<KeyboardData>| match event.key() {
                Key::Escape => on_close.call(None),
                Key::Enter => on_close.call(Some(path.read().trim().to_string())),
                _ => {}
            },
            div {
                class: "modal",
                h3 { "{title}" }
                label {
                    "File path"
                    input {
                        r#type: "text",
                        placeholder: "/path/to/file",
                        autofocus: true,
                        value: "{path}",
                        oninput: move |event: Event<FormData>| path.set(event.value()),
                    }
                }
                p { class: "modal-hint", "Accepts {accept}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "secondary-button",
                        onclick: move |_| on_close.call(None),
                        "Cancel"
                    }
                    button {
                        class: "primary-button",
                        onclick: move |_| on_close.call(Some(path.read().trim().to_string())),
                        "Add"
                    }
                }
            }
        }
    }
}
