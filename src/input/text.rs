use super::{LoadError, LoadedDocument};
use std::fs;
use std::io;
use std::path::Path;

/// Load a plain-text file, rejecting anything that is not strict UTF-8.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let content = String::from_utf8(bytes).map_err(|e| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    Ok(LoadedDocument {
        content,
        source: format!("text:{}", path.display()),
    })
}
