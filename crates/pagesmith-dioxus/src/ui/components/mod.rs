pub mod block_card;
pub mod empty_document;
pub mod link_block;
pub mod link_form;
pub mod media_block;
pub mod media_form;
pub mod notification;
pub mod text_block;
pub mod toolbar;

pub use block_card::BlockCard;
pub use empty_document::EmptyDocument;
pub use link_block::LinkBlockView;
pub use link_form::LinkFormDialog;
pub use media_block::MediaPreview;
pub use media_form::MediaPathForm;
pub use notification::{Notice, NoticeLevel, Notification};
pub use text_block::TextBlockEditor;
pub use toolbar::Toolbar;
