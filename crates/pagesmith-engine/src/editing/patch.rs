use crate::models::BlockId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Block that was created, changed or removed; `None` when nothing happened
    pub changed: Option<BlockId>,
    pub version: u64,
}

impl Patch {
    pub fn is_noop(&self) -> bool {
        self.changed.is_none()
    }
}
