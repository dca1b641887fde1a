use html_escape::{encode_double_quoted_attribute, encode_text};

use super::stylesheet::text_style_css;
use crate::models::{Block, BlockContent};

/// Render one block as its exported wrapper element.
///
/// Text markup is written verbatim: it is authored in the builder's rich-text
/// editor and trusted. Media sources, link targets and link labels are
/// escaped.
pub fn render_block(block: &Block) -> String {
    match block.body() {
        BlockContent::Text(text) => format!(
            r#"<div class="block block-text" style="{}">{}</div>"#,
            text_style_css(&text.style),
            text.html
        ),
        BlockContent::Image(media) => format!(
            r#"<div class="block block-image"><img src="{}" alt=""></div>"#,
            encode_double_quoted_attribute(&media.src)
        ),
        BlockContent::Video(media) => format!(
            r#"<div class="block block-video"><video src="{}" controls></video></div>"#,
            encode_double_quoted_attribute(&media.src)
        ),
        BlockContent::Link(link) => format!(
            r#"<div class="block block-link"><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></div>"#,
            encode_double_quoted_attribute(&link.url),
            encode_text(link.label())
        ),
    }
}
