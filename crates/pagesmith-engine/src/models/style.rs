use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Allowed font sizes in pixels
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 8..=72;
/// Allowed minimum block heights in pixels
pub const MIN_HEIGHT_RANGE: RangeInclusive<u32> = 40..=400;

pub const DEFAULT_FONT_SIZE_PX: u32 = 16;
pub const DEFAULT_MIN_HEIGHT_PX: u32 = 40;
pub const DEFAULT_COLOR: &str = "#333333";

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Presentation of a text block.
///
/// Every field is always populated: a text block never carries a partial
/// style, so the exporter can emit all seven CSS properties unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub align: TextAlign,
    pub font_size_px: u32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub underline: bool,
    pub color: String,
    pub min_height_px: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            align: TextAlign::Left,
            font_size_px: DEFAULT_FONT_SIZE_PX,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            underline: false,
            color: DEFAULT_COLOR.to_string(),
            min_height_px: DEFAULT_MIN_HEIGHT_PX,
        }
    }
}

impl TextStyle {
    /// Merge the fields present in `patch`, leaving the others untouched.
    ///
    /// Sizes are clamped into their ranges and colors that are not hex
    /// colors are dropped. Returns whether anything changed.
    pub fn merge(&mut self, patch: &StylePatch) -> bool {
        let before = self.clone();

        if let Some(align) = patch.align {
            self.align = align;
        }
        if let Some(size) = patch.font_size_px {
            self.font_size_px = clamp_font_size(size as i64);
        }
        if let Some(weight) = patch.font_weight {
            self.font_weight = weight;
        }
        if let Some(style) = patch.font_style {
            self.font_style = style;
        }
        if let Some(underline) = patch.underline {
            self.underline = underline;
        }
        if let Some(color) = &patch.color {
            if is_hex_color(color) {
                self.color = color.clone();
            } else {
                log::debug!("ignoring invalid color {color:?}");
            }
        }
        if let Some(height) = patch.min_height_px {
            self.min_height_px = clamp_min_height(height as i64);
        }

        *self != before
    }

    /// Bring sizes back into range and replace an invalid color with the default
    pub fn normalized(mut self) -> Self {
        self.font_size_px = clamp_font_size(self.font_size_px as i64);
        self.min_height_px = clamp_min_height(self.min_height_px as i64);
        if !is_hex_color(&self.color) {
            self.color = DEFAULT_COLOR.to_string();
        }
        self
    }

    /// Flip a two-state field between its active and default value
    pub fn toggle(&mut self, field: ToggleField) {
        match field {
            ToggleField::Bold => {
                self.font_weight = if self.font_weight == FontWeight::Bold {
                    FontWeight::Normal
                } else {
                    FontWeight::Bold
                };
            }
            ToggleField::Italic => {
                self.font_style = if self.font_style == FontStyle::Italic {
                    FontStyle::Normal
                } else {
                    FontStyle::Italic
                };
            }
            ToggleField::Underline => self.underline = !self.underline,
        }
    }

    pub fn is_active(&self, field: ToggleField) -> bool {
        match field {
            ToggleField::Bold => self.font_weight == FontWeight::Bold,
            ToggleField::Italic => self.font_style == FontStyle::Italic,
            ToggleField::Underline => self.underline,
        }
    }

    pub fn adjust_font_size(&mut self, delta_px: i32) {
        self.font_size_px = clamp_font_size(self.font_size_px as i64 + delta_px as i64);
    }

    pub fn adjust_min_height(&mut self, delta_px: i32) {
        self.min_height_px = clamp_min_height(self.min_height_px as i64 + delta_px as i64);
    }
}

/// A subset of [`TextStyle`] fields to merge into an existing style
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePatch {
    pub align: Option<TextAlign>,
    pub font_size_px: Option<u32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub underline: Option<bool>,
    pub color: Option<String>,
    pub min_height_px: Option<u32>,
}

impl StylePatch {
    pub fn align(align: TextAlign) -> Self {
        Self {
            align: Some(align),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Two-state style fields driven by toolbar toggle buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleField {
    Bold,
    Italic,
    Underline,
}

pub fn clamp_font_size(px: i64) -> u32 {
    clamp_into(px, &FONT_SIZE_RANGE)
}

pub fn clamp_min_height(px: i64) -> u32 {
    clamp_into(px, &MIN_HEIGHT_RANGE)
}

fn clamp_into(px: i64, range: &RangeInclusive<u32>) -> u32 {
    px.clamp(*range.start() as i64, *range.end() as i64) as u32
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}
