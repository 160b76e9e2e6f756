use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("File '{}' is not valid UTF-8 (invalid byte sequence at offset {offset})", .path.display())]
    InvalidEncoding { path: PathBuf, offset: usize },

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Decoded input text, ready for tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub content: String,
    pub source: String,
}

/// Input formats recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Text,
    Pdf,
    Epub,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => InputFormat::Pdf,
            Some("epub") => InputFormat::Epub,
            _ => InputFormat::Text,
        }
    }
}

/// Load `path`, picking the decoder from its extension.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading input");

    match format {
        InputFormat::Text => text::load(path),
        InputFormat::Pdf => pdf::load(path),
        InputFormat::Epub => epub::load(path),
    }
}

pub mod epub;
pub mod pdf;
pub mod text;
