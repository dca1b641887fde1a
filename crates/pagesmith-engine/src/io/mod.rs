use crate::export::EXPORT_FILE_NAME;
use crate::media::{DataUri, MediaKind, mime_for_path};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported media file {path}: expected {expected}")]
    UnsupportedMedia {
        path: PathBuf,
        expected: &'static str,
    },
    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(String),
}

/// Read an image or video file into a data URI.
///
/// Files whose extension does not map to a MIME type of the requested kind
/// are rejected before anything is read.
pub fn read_media_file(path: &Path, kind: MediaKind) -> Result<DataUri, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let mime = mime_for_path(path)
        .filter(|mime| kind.accepts(mime))
        .ok_or_else(|| IoError::UnsupportedMedia {
            path: path.to_path_buf(),
            expected: kind.accept(),
        })?;

    let bytes = fs::read(path)?;
    log::info!(
        "loaded {} ({} bytes, {mime})",
        path.display(),
        bytes.len()
    );
    Ok(DataUri::encode(mime, &bytes))
}

/// Write an exported page into `output_dir` as `landing-page.html`
pub fn write_export(output_dir: &Path, html: &str) -> Result<PathBuf, IoError> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(IoError::InvalidOutputDir(format!(
            "{} is not a directory",
            output_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(EXPORT_FILE_NAME);
    fs::write(&path, html)?;
    log::info!("exported page to {}", path.display());
    Ok(path)
}

pub fn validate_output_dir(path: &Path) -> Result<(), IoError> {
    if path.exists() && !path.is_dir() {
        return Err(IoError::InvalidOutputDir(
            "path exists and is not a directory".to_string(),
        ));
    }

    Ok(())
}
