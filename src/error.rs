use crate::input::LoadError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit statuses, one per failure class.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const IO: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_ENCODING: i32 = 3;
    pub const DOCUMENT: i32 = 4;
    pub const OUTPUT_OPEN: i32 = 5;
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Cannot open output file '{}': {source}", .path.display())]
    OutputOpen { path: PathBuf, source: io::Error },

    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Load(LoadError::FileNotFound(_)) => exit_code::NOT_FOUND,
            AppError::Load(LoadError::InvalidEncoding { .. }) => exit_code::INVALID_ENCODING,
            AppError::Load(LoadError::PdfParse(_) | LoadError::EpubParse(_)) => exit_code::DOCUMENT,
            AppError::Load(LoadError::Io { .. }) => exit_code::IO,
            AppError::OutputOpen { .. } => exit_code::OUTPUT_OPEN,
            AppError::Write(_) => exit_code::IO,
        }
    }
}
