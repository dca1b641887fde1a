use crate::models::{BlockContent, BlockId, BlockKind, StylePatch, ToggleField};

/// Every mutation the block store understands.
///
/// Frontends translate their input events into commands and hand them to
/// [`BlockStore::apply`](crate::editing::BlockStore::apply), so the same
/// editing behaviour is shared between the terminal and graphical builders.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Append a new block of `kind`, using `content` instead of the kind's default
    Add {
        kind: BlockKind,
        content: Option<String>,
    },
    /// Append a fully specified block payload
    AddWith { body: BlockContent },
    UpdateContent { id: BlockId, content: String },
    UpdateStyle { id: BlockId, patch: StylePatch },
    ToggleStyle { id: BlockId, field: ToggleField },
    AdjustFontSize { id: BlockId, delta_px: i32 },
    AdjustMinHeight { id: BlockId, delta_px: i32 },
    /// Replace a link's display text; `None` or empty falls back to the URL
    SetLinkText {
        id: BlockId,
        display_text: Option<String>,
    },
    Delete { id: BlockId },
}

impl Cmd {
    /// The block this command addresses, if it targets an existing one
    pub fn target(&self) -> Option<BlockId> {
        match self {
            Cmd::Add { .. } | Cmd::AddWith { .. } => None,
            Cmd::UpdateContent { id, .. }
            | Cmd::UpdateStyle { id, .. }
            | Cmd::ToggleStyle { id, .. }
            | Cmd::AdjustFontSize { id, .. }
            | Cmd::AdjustMinHeight { id, .. }
            | Cmd::SetLinkText { id, .. }
            | Cmd::Delete { id } => Some(*id),
        }
    }
}
