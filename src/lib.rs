//! Normalize raw text into a newline-delimited token stream for corpus
//! pipelines: lowercase alphanumeric words plus `.`, `!`, `,` and `-` as
//! standalone tokens.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod tokenizer;

pub use config::{Config, OutputTarget};
pub use error::AppError;
pub use input::{LoadError, LoadedDocument};
pub use output::TokenSink;
pub use pipeline::run;
pub use tokenizer::{tokenize, Token, Tokens};
