use dioxus::prelude::*;
use pagesmith_engine::export::text_style_css;
use pagesmith_engine::{BlockId, Cmd, StylePatch, TextAlign, TextBlock, ToggleField};

const FONT_STEP_PX: i32 = 2;
const HEIGHT_STEP_PX: i32 = 20;

/// Text block card body: style controls, a markup editor and a live preview
#[component]
pub fn TextBlockEditor(id: BlockId, text: TextBlock, on_command: Callback<Cmd>) -> Element {
    // Edits stay local until the textarea loses focus
    let local_content = use_signal(|| text.html.clone());

    let style = text.style.clone();
    let preview_style = text_style_css(&style);
    let color = style.color.clone();

    rsx! {
        div {
            class: "text-block",
            div {
                class: "style-controls",
                for (align, label) in [
                    (TextAlign::Left, "Left"),
                    (TextAlign::Center, "Center"),
                    (TextAlign::Right, "Right"),
                ] {
                    button {
                        class: button_class(style.align == align),
                        onclick: move |_| on_command.call(Cmd::UpdateStyle {
                            id,
                            patch: StylePatch::align(align),
                        }),
                        "{label}"
                    }
                }
                for (field, label) in [
                    (ToggleField::Bold, "B"),
                    (ToggleField::Italic, "I"),
                    (ToggleField::Underline, "U"),
                ] {
                    button {
                        class: button_class(style.is_active(field)),
                        onclick: move |_| on_command.call(Cmd::ToggleStyle { id, field }),
                        "{label}"
                    }
                }
                div {
                    class: "stepper",
                    button {
                        class: "style-button",
                        onclick: move |_| on_command.call(Cmd::AdjustFontSize {
                            id,
                            delta_px: -FONT_STEP_PX,
                        }),
                        "A-"
                    }
                    span { class: "stepper-value", "{style.font_size_px}px" }
                    button {
                        class: "style-button",
                        onclick: move |_| on_command.call(Cmd::AdjustFontSize {
                            id,
                            delta_px: FONT_STEP_PX,
                        }),
                        "A+"
                    }
                }
                div {
                    class: "stepper",
                    button {
                        class: "style-button",
                        onclick: move |_| on_command.call(Cmd::AdjustMinHeight {
                            id,
                            delta_px: -HEIGHT_STEP_PX,
                        }),
                        "H-"
                    }
                    span { class: "stepper-value", "{style.min_height_px}px" }
                    button {
                        class: "style-button",
                        onclick: move |_| on_command.call(Cmd::AdjustMinHeight {
                            id,
                            delta_px: HEIGHT_STEP_PX,
                        }),
                        "H+"
                    }
                }
                input {
                    class: "color-input",
                    r#type: "color",
                    value: "{color}",
                    oninput: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateStyle {
                            id,
                            patch: StylePatch::color(event.value()),
                        });
                    },
                }
            }
            textarea {
                class: "text-editor",
                value: local_content.read().clone(),
                spellcheck: false,
                rows: textarea_rows(&local_content.read()),
                oninput: {
                    let mut local_content = local_content;
                    move |event: Event<FormData>| {
                        local_content.set(event.value());
                    }
                },
                onblur: {
                    let original = text.html.clone();
                    move |_| {
                        let current = local_content.read().clone();
                        if current != original {
                            on_command.call(Cmd::UpdateContent {
                                id,
                                content: current,
                            });
                        }
                    }
                },
            }
            div {
                class: "text-preview",
                style: "{preview_style}",
                dangerous_inner_html: "{text.html}",
            }
        }
    }
}

fn button_class(active: bool) -> &'static str {
    if active {
        "style-button active"
    } else {
        "style-button"
    }
}

fn textarea_rows(content: &str) -> u32 {
    let line_count = content.lines().count().max(3);
    (line_count as u32).min(12)
}
