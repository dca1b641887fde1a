//! Media sources for image and video blocks.
//!
//! Uploaded files are embedded into the page as base64 data URIs so the
//! exported document has no external media dependencies.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::models::BlockKind;

/// Which media block a file is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn block_kind(self) -> BlockKind {
        match self {
            MediaKind::Image => BlockKind::Image,
            MediaKind::Video => BlockKind::Video,
        }
    }

    /// MIME type prefix accepted for this kind, e.g. `image/`
    pub fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "image/",
            MediaKind::Video => "video/",
        }
    }

    /// `accept` filter for file inputs
    pub fn accept(self) -> &'static str {
        match self {
            MediaKind::Image => "image/*",
            MediaKind::Video => "video/*",
        }
    }

    pub fn accepts(self, mime: &str) -> bool {
        mime.starts_with(self.mime_prefix())
    }
}

/// MIME type for a file extension, if it is a supported image or video format
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "ogv" | "ogg" => "video/ogg",
        "mov" => "video/quicktime",
        _ => return None,
    };
    Some(mime)
}

pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
}

/// A `data:` URI carrying base64-encoded file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    uri: String,
}

impl DataUri {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self {
            mime: mime.to_string(),
            uri: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    pub fn into_string(self) -> String {
        self.uri
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
