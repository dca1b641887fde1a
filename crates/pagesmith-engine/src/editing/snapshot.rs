use serde::Serialize;

use crate::models::{Block, BlockId};

/// Immutable view of the store handed to renderers.
///
/// Renderers never mutate blocks directly; they send commands back to the
/// store and re-render from the next snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Store version the snapshot was taken at, for change detection
    pub version: u64,
    pub blocks: Vec<Block>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }
}
