use crate::models::TextStyle;

/// Layout and per-block rules embedded in every exported page
pub const PAGE_CSS: &str = r#"*, *::before, *::after {
  box-sizing: border-box;
}
body {
  margin: 0;
  background: #f4f5f7;
  color: #333333;
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  line-height: 1.6;
}
.page {
  max-width: 880px;
  margin: 0 auto;
  padding: 48px 24px;
  display: flex;
  flex-direction: column;
  gap: 24px;
}
.block {
  background: #ffffff;
  border-radius: 12px;
  box-shadow: 0 4px 16px rgba(15, 23, 42, 0.08);
  padding: 24px;
  overflow: hidden;
}
.block-text {
  word-wrap: break-word;
}
.block-image img,
.block-video video {
  display: block;
  width: 100%;
  height: auto;
  max-height: 640px;
  object-fit: contain;
  border-radius: 8px;
}
.block-link {
  text-align: center;
}
.block-link a {
  display: inline-block;
  padding: 12px 28px;
  border-radius: 999px;
  background: #4f46e5;
  color: #ffffff;
  font-family: 'Poppins', 'Inter', sans-serif;
  font-weight: 600;
  text-decoration: none;
  transition: background 0.2s ease;
}
.block-link a:hover {
  background: #4338ca;
}
.block-link a::after {
  content: " \2197";
}
@media (max-width: 600px) {
  .page {
    padding: 24px 12px;
  }
  .block {
    padding: 16px;
  }
}
"#;

/// Inline CSS for a text block.
///
/// Always emits all seven properties in a fixed order so exported pages
/// diff cleanly.
pub fn text_style_css(style: &TextStyle) -> String {
    let decoration = if style.underline { "underline" } else { "none" };
    format!(
        "text-align: {}; font-size: {}px; font-weight: {}; font-style: {}; text-decoration: {}; color: {}; min-height: {}px",
        style.align.as_css(),
        style.font_size_px,
        style.font_weight.as_css(),
        style.font_style.as_css(),
        decoration,
        style.color,
        style.min_height_px,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FontStyle, FontWeight, TextAlign};

    #[test]
    fn test_default_style_css() {
        insta::assert_snapshot!(
            text_style_css(&TextStyle::default()),
            @"text-align: left; font-size: 16px; font-weight: normal; font-style: normal; text-decoration: none; color: #333333; min-height: 40px"
        );
    }

    #[test]
    fn test_explicit_style_css() {
        let style = TextStyle {
            align: TextAlign::Center,
            font_size_px: 20,
            font_weight: FontWeight::Bold,
            font_style: FontStyle::Italic,
            underline: true,
            color: "#ff0000".to_string(),
            min_height_px: 100,
        };

        assert_eq!(
            text_style_css(&style),
            "text-align: center; font-size: 20px; font-weight: bold; font-style: italic; text-decoration: underline; color: #ff0000; min-height: 100px"
        );
    }

    #[test]
    fn test_page_css_carries_block_rules() {
        for selector in [".block {", ".block-image img", ".block-video video", ".block-link a::after"] {
            assert!(PAGE_CSS.contains(selector), "missing {selector}");
        }
        assert!(PAGE_CSS.contains("box-shadow"));
        assert!(PAGE_CSS.contains("border-radius"));
    }
}
