pub mod block;
pub mod style;

pub use block::{
    Block, BlockContent, BlockId, BlockKind, DEFAULT_TEXT_CONTENT, LinkBlock, MediaBlock,
    TextBlock,
};
pub use style::{
    FONT_SIZE_RANGE, FontStyle, FontWeight, MIN_HEIGHT_RANGE, StylePatch, TextAlign, TextStyle,
    ToggleField,
};
