use super::{LoadError, LoadedDocument};
use std::fs;
use std::path::Path;

/// Load text from a PDF file using the pdf-extract crate.
///
/// The extracted text is tokenized like any plain-text input, so layout
/// whitespace produced by the extractor only ever separates words.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let buffer = fs::read(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))
        .map(|content| LoadedDocument {
            content,
            source: format!("pdf:{}", path.display()),
        })
}
