//! Standalone HTML export.
//!
//! The exporter is a pure function of the block list (and the page shell):
//! no ids, timestamps or other hidden state reach the output, so exporting
//! the same blocks twice yields byte-identical documents.

mod fragment;
mod stylesheet;

pub use fragment::render_block;
pub use stylesheet::{PAGE_CSS, text_style_css};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::Block;

/// File name the exported page is saved under
pub const EXPORT_FILE_NAME: &str = "landing-page.html";
pub const EXPORT_MIME_TYPE: &str = "text/html";

pub const DEFAULT_PAGE_TITLE: &str = "Landing Page";
pub const DEFAULT_FONT_STYLESHEETS: &[&str] = &[
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&family=Poppins:wght@600&display=swap",
];

/// Fixed parts of the exported document around the blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShell {
    pub title: String,
    /// Web font stylesheet URLs linked from `<head>`
    pub font_stylesheets: Vec<String>,
}

impl Default for PageShell {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            font_stylesheets: DEFAULT_FONT_STYLESHEETS
                .iter()
                .map(|url| url.to_string())
                .collect(),
        }
    }
}

/// Export blocks with the default page shell
pub fn export_html(blocks: &[Block]) -> String {
    export_html_with(blocks, &PageShell::default())
}

pub fn export_html_with(blocks: &[Block], shell: &PageShell) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", encode_text(&shell.title)));
    for url in &shell.font_stylesheets {
        html.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            encode_double_quoted_attribute(url)
        ));
    }
    html.push_str("<style>\n");
    html.push_str(PAGE_CSS);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<main class=\"page\">");
    if !blocks.is_empty() {
        html.push('\n');
        for block in blocks {
            html.push_str(&render_block(block));
            html.push('\n');
        }
    }
    html.push_str("</main>\n</body>\n</html>\n");
    html
}
