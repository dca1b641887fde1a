pub mod editing;
pub mod export;
pub mod io;
pub mod media;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{BlockStore, Cmd, LinkForm, LinkFormOutcome, Patch, Snapshot};
pub use export::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE, PageShell, export_html, export_html_with};
pub use io::IoError;
pub use media::{DataUri, MediaKind};
pub use models::*;
