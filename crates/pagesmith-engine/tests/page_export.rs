//! End-to-end checks of building a page through the store and exporting it.

use pagesmith_engine::editing::{BlockStore, Cmd, LinkForm};
use pagesmith_engine::{
    BlockKind, FontStyle, FontWeight, StylePatch, TextAlign, ToggleField, export_html,
};
use pretty_assertions::assert_eq;

const EXPECTED_STYLE: &str = "text-align: center; font-size: 20px; font-weight: bold; font-style: italic; text-decoration: underline; color: #ff0000; min-height: 100px";

fn body_of(html: &str) -> &str {
    let start = html.find("<main class=\"page\">").unwrap() + "<main class=\"page\">".len();
    let end = html.find("</main>").unwrap();
    &html[start..end]
}

#[test]
fn empty_page_exports_empty_body() {
    let store = BlockStore::new();
    let html = export_html(store.blocks());

    assert_eq!(body_of(&html), "");
}

#[test]
fn styled_text_block_exports_exact_inline_style() {
    let mut store = BlockStore::new();
    let id = store
        .add_block(BlockKind::Text, Some("<p>Hello <em>world</em></p>".into()))
        .id();
    store.update_style(
        id,
        &StylePatch {
            align: Some(TextAlign::Center),
            font_size_px: Some(20),
            font_weight: Some(FontWeight::Bold),
            font_style: Some(FontStyle::Italic),
            underline: Some(true),
            color: Some("#ff0000".to_string()),
            min_height_px: Some(100),
        },
    );

    let html = export_html(store.blocks());

    assert!(html.contains(&format!("style=\"{EXPECTED_STYLE}\"")));
    assert!(html.contains("<p>Hello <em>world</em></p>"));
}

#[test]
fn same_style_reached_through_commands() {
    let mut store = BlockStore::new();
    let id = store
        .apply(Cmd::Add {
            kind: BlockKind::Text,
            content: None,
        })
        .changed
        .unwrap();

    store.apply(Cmd::UpdateStyle {
        id,
        patch: StylePatch::align(TextAlign::Center),
    });
    store.apply(Cmd::AdjustFontSize { id, delta_px: 4 });
    store.apply(Cmd::ToggleStyle {
        id,
        field: ToggleField::Bold,
    });
    store.apply(Cmd::ToggleStyle {
        id,
        field: ToggleField::Italic,
    });
    store.apply(Cmd::ToggleStyle {
        id,
        field: ToggleField::Underline,
    });
    store.apply(Cmd::UpdateStyle {
        id,
        patch: StylePatch::color("#ff0000"),
    });
    store.apply(Cmd::AdjustMinHeight { id, delta_px: 60 });

    assert!(export_html(store.blocks()).contains(EXPECTED_STYLE));
}

#[test]
fn link_without_display_text_shows_url() {
    let mut store = BlockStore::new();
    store.add_block(BlockKind::Link, Some("https://example.com".into()));

    let html = export_html(store.blocks());

    assert!(html.contains(r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">https://example.com</a>"#));
}

#[test]
fn link_with_display_text_from_form() {
    let mut store = BlockStore::new();
    let cmd = LinkForm::submitted("https://example.com", "Visit")
        .resolve()
        .into_command()
        .unwrap();
    store.apply(cmd);

    let html = export_html(store.blocks());

    assert!(html.contains(r#"href="https://example.com""#));
    assert!(html.contains(">Visit</a>"));
}

#[test]
fn deleted_blocks_disappear_from_export() {
    let mut store = BlockStore::new();
    store.add_block(BlockKind::Text, Some("keep-one".into()));
    let gone = store.add_block(BlockKind::Text, Some("drop-me".into())).id();
    store.add_block(BlockKind::Text, Some("keep-two".into()));

    store.delete_block(gone);
    let html = export_html(store.blocks());

    assert!(!html.contains("drop-me"));
    assert!(html.find("keep-one").unwrap() < html.find("keep-two").unwrap());
}

#[test]
fn export_is_byte_identical_for_unchanged_store() {
    let mut store = BlockStore::new();
    store.add_block(BlockKind::Text, None);
    store.add_block(BlockKind::Image, Some("data:image/gif;base64,R0lGOD".into()));
    store.add_block(BlockKind::Video, Some("data:video/mp4;base64,AAAA".into()));
    store.add_link("https://example.com", Some("Go".into()));

    let first = export_html(store.blocks());
    let second = export_html(store.snapshot().blocks.as_slice());

    assert_eq!(first, second);
}

#[test]
fn one_wrapper_per_block() {
    let mut store = BlockStore::new();
    for kind in [
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Link,
    ] {
        store.add_block(kind, Some("x".into()));
    }

    let html = export_html(store.blocks());
    let body = body_of(&html);

    assert_eq!(body.lines().filter(|line| !line.is_empty()).count(), 4);
    assert!(body.contains("block-text"));
    assert!(body.contains("<img src=\"x\""));
    assert!(body.contains("<video src=\"x\" controls>"));
    assert!(body.contains("<a href=\"x\""));
}
