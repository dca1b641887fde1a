use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::style::TextStyle;

/// Placeholder markup for freshly added text blocks
pub const DEFAULT_TEXT_CONTENT: &str = "Click to edit this text";

/// Stable identifier for a block, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four kinds of content a page can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Video,
    Link,
}

impl BlockKind {
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Text => "Text",
            BlockKind::Image => "Image",
            BlockKind::Video => "Video",
            BlockKind::Link => "Link",
        }
    }
}

/// Rich-text block. `html` is trusted markup written by the page author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub html: String,
    pub style: TextStyle,
}

/// Image or video; `src` is a data URI or URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBlock {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBlock {
    pub url: String,
    pub display_text: Option<String>,
}

impl LinkBlock {
    /// Text shown for the link: the display text when set, otherwise the URL
    pub fn label(&self) -> &str {
        match self.display_text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => &self.url,
        }
    }
}

/// Kind-specific payload of a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlockContent {
    Text(TextBlock),
    Image(MediaBlock),
    Video(MediaBlock),
    Link(LinkBlock),
}

impl BlockContent {
    /// Default payload for a kind, with `initial` as its content when given
    pub fn for_kind(kind: BlockKind, initial: Option<String>) -> Self {
        match kind {
            BlockKind::Text => BlockContent::Text(TextBlock {
                html: initial.unwrap_or_else(|| DEFAULT_TEXT_CONTENT.to_string()),
                style: TextStyle::default(),
            }),
            BlockKind::Image => BlockContent::Image(MediaBlock {
                src: initial.unwrap_or_default(),
            }),
            BlockKind::Video => BlockContent::Video(MediaBlock {
                src: initial.unwrap_or_default(),
            }),
            BlockKind::Link => BlockContent::Link(LinkBlock {
                url: initial.unwrap_or_default(),
                display_text: None,
            }),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::Video(_) => BlockKind::Video,
            BlockContent::Link(_) => BlockKind::Link,
        }
    }
}

/// One unit of page content.
///
/// The id and kind are fixed at creation; only the payload's fields change
/// afterwards, and only through the block store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    body: BlockContent,
}

impl Block {
    pub(crate) fn new(body: BlockContent) -> Self {
        Self {
            id: BlockId::new(),
            body,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }

    pub fn body(&self) -> &BlockContent {
        &self.body
    }

    pub(crate) fn body_mut(&mut self) -> &mut BlockContent {
        &mut self.body
    }

    /// The common content string: markup, media source or link URL
    pub fn content(&self) -> &str {
        match &self.body {
            BlockContent::Text(text) => &text.html,
            BlockContent::Image(media) | BlockContent::Video(media) => &media.src,
            BlockContent::Link(link) => &link.url,
        }
    }

    pub(crate) fn set_content(&mut self, content: String) {
        match &mut self.body {
            BlockContent::Text(text) => text.html = content,
            BlockContent::Image(media) | BlockContent::Video(media) => media.src = content,
            BlockContent::Link(link) => link.url = content,
        }
    }

    pub fn text_style(&self) -> Option<&TextStyle> {
        match &self.body {
            BlockContent::Text(text) => Some(&text.style),
            _ => None,
        }
    }

    pub(crate) fn text_style_mut(&mut self) -> Option<&mut TextStyle> {
        match &mut self.body {
            BlockContent::Text(text) => Some(&mut text.style),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::style::{FontStyle, FontWeight, TextAlign};

    #[test]
    fn test_link_label_falls_back_to_url() {
        let mut link = LinkBlock {
            url: "https://example.com".to_string(),
            display_text: None,
        };
        assert_eq!(link.label(), "https://example.com");

        link.display_text = Some(String::new());
        assert_eq!(link.label(), "https://example.com");

        link.display_text = Some("Visit".to_string());
        assert_eq!(link.label(), "Visit");
    }

    #[test]
    fn test_for_kind_defaults() {
        let text = BlockContent::for_kind(BlockKind::Text, None);
        match text {
            BlockContent::Text(text) => {
                assert_eq!(text.html, DEFAULT_TEXT_CONTENT);
                assert_eq!(text.style, TextStyle::default());
            }
            other => panic!("expected text block, got {other:?}"),
        }

        let image = BlockContent::for_kind(BlockKind::Image, Some("data:image/png;base64,AA==".into()));
        assert_eq!(image.kind(), BlockKind::Image);
    }

    #[test]
    fn test_content_accessor_covers_every_kind() {
        for kind in [
            BlockKind::Text,
            BlockKind::Image,
            BlockKind::Video,
            BlockKind::Link,
        ] {
            let mut block = Block::new(BlockContent::for_kind(kind, Some("x".to_string())));
            assert_eq!(block.kind(), kind);
            assert_eq!(block.content(), "x");

            block.set_content("y".to_string());
            assert_eq!(block.content(), "y");
            assert_eq!(block.kind(), kind);
        }
    }

    #[test]
    fn test_only_text_blocks_have_style() {
        let text = Block::new(BlockContent::for_kind(BlockKind::Text, None));
        let link = Block::new(BlockContent::for_kind(BlockKind::Link, None));

        assert!(text.text_style().is_some());
        assert!(link.text_style().is_none());
    }

    #[test]
    fn test_block_ids_are_unique() {
        let a = Block::new(BlockContent::for_kind(BlockKind::Text, None));
        let b = Block::new(BlockContent::for_kind(BlockKind::Text, None));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_block_content_serialization() {
        let contents = vec![
            BlockContent::Text(TextBlock {
                html: "Hello".to_string(),
                style: TextStyle {
                    align: TextAlign::Center,
                    font_size_px: 24,
                    font_weight: FontWeight::Bold,
                    font_style: FontStyle::Normal,
                    underline: false,
                    color: "red".to_string(),
                    min_height_px: 40,
                },
            }),
            BlockContent::for_kind(BlockKind::Image, Some("logo.png".to_string())),
            BlockContent::for_kind(BlockKind::Link, Some("example.com".to_string())),
        ];

        insta::assert_yaml_snapshot!(contents, @r"
        - kind: text
          html: Hello
          style:
            align: center
            font_size_px: 24
            font_weight: bold
            font_style: normal
            underline: false
            color: red
            min_height_px: 40
        - kind: image
          src: logo.png
        - kind: link
          url: example.com
          display_text: ~
        ");
    }
}
