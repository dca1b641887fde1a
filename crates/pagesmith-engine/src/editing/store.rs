use crate::editing::{Cmd, Patch, Snapshot};
use crate::media::{DataUri, MediaKind};
use crate::models::{
    Block, BlockContent, BlockId, BlockKind, LinkBlock, MediaBlock, StylePatch, TextBlock,
    TextStyle, ToggleField,
};

/// Ordered, in-memory collection of the page's blocks.
///
/// The store is the only mutation surface for blocks. Order is append order
/// and is also the order blocks are rendered and exported in.
///
/// Mutations addressed to an unknown id, or to a block of the wrong kind, are
/// ignored: the collection and version stay unchanged and the method returns
/// `false`. Every applied mutation bumps [`version`](Self::version).
///
/// ```rust
/// # use pagesmith_engine::{BlockKind, BlockStore, ToggleField};
/// let mut store = BlockStore::new();
/// let id = store.add_block(BlockKind::Text, None).id();
/// store.toggle_style(id, ToggleField::Bold);
/// store.adjust_font_size(id, 100);
///
/// let style = store.get(id).and_then(|b| b.text_style()).unwrap();
/// assert_eq!(style.font_size_px, 72);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStore {
    blocks: Vec<Block>,
    version: u64,
}

impl BlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            blocks: self.blocks.clone(),
        }
    }

    /// Append a block of `kind`, with `initial_content` replacing the kind's
    /// default content. Text blocks always get the default style.
    pub fn add_block(&mut self, kind: BlockKind, initial_content: Option<String>) -> &Block {
        self.add(BlockContent::for_kind(kind, initial_content))
    }

    pub fn add_text(&mut self, html: impl Into<String>, style: TextStyle) -> &Block {
        self.add(BlockContent::Text(TextBlock {
            html: html.into(),
            style,
        }))
    }

    pub fn add_media(&mut self, kind: MediaKind, source: DataUri) -> &Block {
        let media = MediaBlock {
            src: source.into_string(),
        };
        self.add(match kind {
            MediaKind::Image => BlockContent::Image(media),
            MediaKind::Video => BlockContent::Video(media),
        })
    }

    pub fn add_link(&mut self, url: impl Into<String>, display_text: Option<String>) -> &Block {
        self.add(BlockContent::Link(LinkBlock {
            url: url.into(),
            display_text: display_text.filter(|text| !text.is_empty()),
        }))
    }

    /// Append an arbitrary payload. Text styles are normalized on the way in.
    pub fn add(&mut self, mut body: BlockContent) -> &Block {
        if let BlockContent::Text(text) = &mut body {
            text.style = std::mem::take(&mut text.style).normalized();
        }
        let block = Block::new(body);
        log::debug!("adding {} block {}", block.kind().label(), block.id());

        self.blocks.push(block);
        self.version += 1;
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn update_content(&mut self, id: BlockId, content: impl Into<String>) -> bool {
        let content = content.into();
        self.mutate(id, |block| {
            block.set_content(content);
            true
        })
    }

    /// Merge the fields present in `patch` into a text block's style
    pub fn update_style(&mut self, id: BlockId, patch: &StylePatch) -> bool {
        self.mutate_style(id, |style| style.merge(patch))
    }

    pub fn toggle_style(&mut self, id: BlockId, field: ToggleField) -> bool {
        self.mutate_style(id, |style| {
            style.toggle(field);
            true
        })
    }

    pub fn adjust_font_size(&mut self, id: BlockId, delta_px: i32) -> bool {
        self.mutate_style(id, |style| {
            style.adjust_font_size(delta_px);
            true
        })
    }

    pub fn adjust_min_height(&mut self, id: BlockId, delta_px: i32) -> bool {
        self.mutate_style(id, |style| {
            style.adjust_min_height(delta_px);
            true
        })
    }

    pub fn set_link_text(&mut self, id: BlockId, display_text: Option<String>) -> bool {
        self.mutate(id, |block| match block.body_mut() {
            BlockContent::Link(link) => {
                link.display_text = display_text.filter(|text| !text.is_empty());
                true
            }
            _ => false,
        })
    }

    /// Remove a block. The remaining blocks keep their relative order.
    pub fn delete_block(&mut self, id: BlockId) -> bool {
        let Some(index) = self.position(id) else {
            log::debug!("delete ignored: no block {id}");
            return false;
        };
        self.blocks.remove(index);
        self.version += 1;
        true
    }

    /// Apply a command and report what changed
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let changed = match cmd {
            Cmd::Add { kind, content } => Some(self.add_block(kind, content).id()),
            Cmd::AddWith { body } => Some(self.add(body).id()),
            Cmd::UpdateContent { id, content } => self.update_content(id, content).then_some(id),
            Cmd::UpdateStyle { id, patch } => self.update_style(id, &patch).then_some(id),
            Cmd::ToggleStyle { id, field } => self.toggle_style(id, field).then_some(id),
            Cmd::AdjustFontSize { id, delta_px } => {
                self.adjust_font_size(id, delta_px).then_some(id)
            }
            Cmd::AdjustMinHeight { id, delta_px } => {
                self.adjust_min_height(id, delta_px).then_some(id)
            }
            Cmd::SetLinkText { id, display_text } => {
                self.set_link_text(id, display_text).then_some(id)
            }
            Cmd::Delete { id } => self.delete_block(id).then_some(id),
        };

        Patch {
            changed,
            version: self.version,
        }
    }

    fn mutate(&mut self, id: BlockId, f: impl FnOnce(&mut Block) -> bool) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|block| block.id() == id) else {
            log::debug!("mutation ignored: no block {id}");
            return false;
        };
        if !f(&mut *block) {
            log::debug!("mutation ignored: nothing to change on {:?} block {id}", block.kind());
            return false;
        }
        self.version += 1;
        true
    }

    /// `f` reports whether it changed the style; unchanged styles are ignored
    fn mutate_style(&mut self, id: BlockId, f: impl FnOnce(&mut TextStyle) -> bool) -> bool {
        self.mutate(id, |block| block.text_style_mut().is_some_and(f))
    }
}
